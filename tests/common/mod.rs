#![allow(dead_code)]

use fnol::analyzer::{LlmProvider, TriageRequest};
use fnol::error::FnolError;
use fnol::models::ClaimImage;
use futures::future::BoxFuture;
use std::io::Cursor;
use std::sync::Mutex;

pub const WELL_FORMED_REPLY: &str = "RISK_LEVEL: High\n\
RISK_FLAGS: vague timeline, property vacancy\n\
SUBROGATION_POTENTIAL: Neighbor's tree fell on roof\n\
ALE_ALERT: yes\n\
SUMMARY: Severe wind loss to a vacant property with third-party involvement.";

pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([90, 120, 200]));
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, image::ImageFormat::Png)
        .expect("encode png fixture");
    cursor.into_inner()
}

pub fn png_image(name: &str) -> ClaimImage {
    ClaimImage::new(name, png_bytes())
}

pub fn corrupt_image(name: &str) -> ClaimImage {
    let mut bytes = png_bytes();
    bytes.truncate(20);
    ClaimImage::new(name, bytes)
}

/// Provider that records every request and answers with a fixed reply or error.
pub struct RecordingProvider {
    reply: Result<String, String>,
    pub requests: Mutex<Vec<TriageRequest>>,
}

impl RecordingProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            reply: Err(error.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<TriageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl LlmProvider for RecordingProvider {
    fn generate<'a>(
        &'a self,
        request: &'a TriageRequest,
    ) -> BoxFuture<'a, Result<String, FnolError>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request.clone());
            self.reply
                .clone()
                .map_err(FnolError::LlmClientError)
        })
    }

    fn model_name(&self) -> &str {
        "recording"
    }
}
