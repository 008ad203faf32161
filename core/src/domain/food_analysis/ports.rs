use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{AnalysisResult, Recognition},
        value_objects::{BarcodeLookup, ImageUpload, Notice},
    },
};

/// Classifies the food shown in an image
#[cfg_attr(test, mockall::automock)]
pub trait RecognitionClient: Send + Sync {
    /// Every failure to obtain predictions must come back as
    /// [`CoreError::Transport`], never as an empty recognition.
    fn recognize(
        &self,
        image: ImageUpload,
    ) -> impl Future<Output = Result<Recognition, CoreError>> + Send;
}

/// Resolves a product from a barcode visible in an image
#[cfg_attr(test, mockall::automock)]
pub trait BarcodeClient: Send + Sync {
    fn lookup_barcode(
        &self,
        image: ImageUpload,
    ) -> impl Future<Output = Result<BarcodeLookup, CoreError>> + Send;
}

/// Receives user-facing notices. Delivery must not block nor fail.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Service trait for food image analysis
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        image: ImageUpload,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
