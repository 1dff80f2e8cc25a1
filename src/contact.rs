use crate::domain::ContactSubmission;
use crate::domain::MailtoLink;
use crate::domain::OwnerEmail;
use crate::relay_client::RelayClient;

/// A way of getting a submission to the site owner, in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryChannel {
    /// `POST` to the configured form relay
    Relay,
    /// Hand the visitor a pre-filled `mailto:` link. Always available, always
    /// last.
    Mailto,
}

/// Result of handling one submission.
///
/// There is no error variant: anything short of a confirmed relay delivery
/// becomes a mail client handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The relay accepted the submission
    Succeeded,
    /// The relay was not configured, rejected the submission, or could not be
    /// reached; the visitor should be sent to this link
    Degraded(MailtoLink),
}

/// Delivers contact form submissions: relay first (if configured), `mailto:`
/// otherwise.
///
/// Read-only after construction, so it is shared across workers without
/// locking.
#[derive(Debug)]
pub struct ContactHandler {
    owner: OwnerEmail,
    relay: Option<RelayClient>,
}

impl ContactHandler {
    pub fn new(
        owner: OwnerEmail,
        relay: Option<RelayClient>,
    ) -> Self {
        Self { owner, relay }
    }

    pub fn owner(&self) -> &OwnerEmail { &self.owner }

    /// Channels tried by `handle`, in order
    pub fn channels(&self) -> Vec<DeliveryChannel> {
        match self.relay {
            Some(_) => vec![DeliveryChannel::Relay, DeliveryChannel::Mailto],
            None => vec![DeliveryChannel::Mailto],
        }
    }

    /// Make exactly one delivery attempt.
    ///
    /// With a relay: one `POST`; 2xx is `Succeeded`, a non-2xx status or
    /// transport error falls through to `mailto:`. Without a relay: straight to
    /// `mailto:`, no network I/O.
    #[tracing::instrument(
        name = "Delivering contact submission",
        skip_all,
        fields(
            sender_name = %submission.name,
            sender_email = %submission.email,
            channel = tracing::field::Empty,
        )
    )]
    pub async fn handle(
        &self,
        submission: &ContactSubmission,
    ) -> DeliveryOutcome {
        for channel in self.channels() {
            tracing::Span::current().record("channel", tracing::field::debug(channel));
            match channel {
                DeliveryChannel::Relay => {
                    let Some(relay) = &self.relay else { continue };
                    match relay.send(submission).await {
                        Ok(()) => {
                            tracing::info!("submission accepted by relay");
                            return DeliveryOutcome::Succeeded;
                        }
                        Err(e) => tracing::warn!(
                            error.cause_chain = ?e,
                            error.message = %e,
                            "relay delivery failed, falling back to mailto"
                        ),
                    }
                }
                DeliveryChannel::Mailto => break,
            }
        }

        tracing::info!("handing submission off to the visitor's mail client");
        DeliveryOutcome::Degraded(MailtoLink::new(&self.owner, submission))
    }
}
