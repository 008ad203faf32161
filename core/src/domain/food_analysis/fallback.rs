use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::Recognition,
        ports::{BarcodeClient, NotificationSink, RecognitionClient},
        value_objects::{BarcodeLookup, FALLBACK_NOTICE, ImageUpload, Notice},
    },
};

/// Routes calls to `primary`, substituting `fallback` exactly once when the
/// primary fails with [`CoreError::Transport`]. Without a fallback the
/// transport error is returned as is. There are no retries.
pub struct WithFallback<P, F, N> {
    primary: P,
    fallback: Option<F>,
    notifier: Arc<N>,
}

impl<P, F, N> WithFallback<P, F, N>
where
    N: NotificationSink,
{
    pub fn new(primary: P, fallback: Option<F>, notifier: Arc<N>) -> Self {
        Self {
            primary,
            fallback,
            notifier,
        }
    }

    fn take_over(&self, operation: &str, reason: String) -> Result<&F, CoreError> {
        match &self.fallback {
            Some(fallback) => {
                warn!(operation, %reason, "backend unavailable, using fallback");
                self.notifier.notify(Notice::error(FALLBACK_NOTICE));
                Ok(fallback)
            }
            None => {
                error!(operation, %reason, "backend unavailable and fallback is disabled");
                Err(CoreError::Transport(reason))
            }
        }
    }
}

impl<P, F, N> RecognitionClient for WithFallback<P, F, N>
where
    P: RecognitionClient,
    F: RecognitionClient,
    N: NotificationSink,
{
    async fn recognize(&self, image: ImageUpload) -> Result<Recognition, CoreError> {
        match self.primary.recognize(image.clone()).await {
            Err(CoreError::Transport(reason)) => {
                self.take_over("recognize", reason)?.recognize(image).await
            }
            other => other,
        }
    }
}

impl<P, F, N> BarcodeClient for WithFallback<P, F, N>
where
    P: BarcodeClient,
    F: BarcodeClient,
    N: NotificationSink,
{
    async fn lookup_barcode(&self, image: ImageUpload) -> Result<BarcodeLookup, CoreError> {
        match self.primary.lookup_barcode(image.clone()).await {
            Err(CoreError::Transport(reason)) => {
                self.take_over("lookup_barcode", reason)?
                    .lookup_barcode(image)
                    .await
            }
            other => other,
        }
    }
}
