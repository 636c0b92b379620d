//! Asynchronous document fetching.
//!
//! The engine only knows the [`Transport`] trait: it hands over a job id and
//! a URL and later receives [`TransportEvent`]s for that job from whoever
//! drives it. [`HttpTransport`] is the production implementation.

use futures::StreamExt;
use tokio::sync::mpsc;

use crate::IonError;
use crate::tracker::JobId;

/// Starts fetches on behalf of the engine.
pub trait Transport {
    /// Begins fetching `url`. Results are reported later as
    /// [`TransportEvent`]s tagged with `job`, ending with exactly one
    /// [`TransportEvent::Complete`].
    fn start(&mut self, job: JobId, url: &str);
}

/// Progress of a fetch started through a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A chunk of the response body.
    Data {
        /// Job the chunk belongs to.
        job: JobId,
        /// Body bytes.
        chunk: Vec<u8>,
    },
    /// The fetch is over, successfully or not.
    Complete {
        /// Finished job.
        job: JobId,
    },
}

/// HTTP transport that streams response bodies into a channel.
///
/// Each fetch runs on its own tokio task. Failures are logged and still
/// end with [`TransportEvent::Complete`], so the engine always gets to
/// parse whatever arrived.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    events: mpsc::UnboundedSender<TransportEvent>,
}

impl HttpTransport {
    /// Creates a transport sending events to `events`.
    ///
    /// # Errors
    ///
    /// Returns [`IonError::Http`] if the HTTP client cannot be built.
    pub fn new(
        user_agent: &str,
        events: mpsc::UnboundedSender<TransportEvent>,
    ) -> Result<Self, IonError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, events })
    }

    /// Creates a transport together with the receiving end of its channel.
    ///
    /// # Errors
    ///
    /// Returns [`IonError::Http`] if the HTTP client cannot be built.
    pub fn channel(
        user_agent: &str,
    ) -> Result<(Self, mpsc::UnboundedReceiver<TransportEvent>), IonError> {
        let (tx, rx) = mpsc::unbounded_channel();
        Ok((Self::new(user_agent, tx)?, rx))
    }
}

impl Transport for HttpTransport {
    fn start(&mut self, job: JobId, url: &str) {
        let client = self.client.clone();
        let events = self.events.clone();
        let url = url.to_owned();

        tokio::spawn(async move {
            if let Err(e) = stream_body(&client, job, &url, &events).await {
                log::warn!("Fetch {job} of {url} failed: {e}");
            }
            if events.send(TransportEvent::Complete { job }).is_err() {
                log::debug!("Receiver gone before {job} completed");
            }
        });
    }
}

async fn stream_body(
    client: &reqwest::Client,
    job: JobId,
    url: &str,
    events: &mpsc::UnboundedSender<TransportEvent>,
) -> Result<(), reqwest::Error> {
    log::debug!("Fetching {url} as {job}");
    let response = client.get(url).send().await?.error_for_status()?;
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        log::trace!("{job}: received {} bytes", chunk.len());
        if events
            .send(TransportEvent::Data {
                job,
                chunk: chunk.to_vec(),
            })
            .is_err()
        {
            break;
        }
    }

    Ok(())
}
