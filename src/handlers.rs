use actix_multipart::Multipart;
use actix_web::{web, Error, HttpResponse, Result};
use futures_util::StreamExt;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::AnalysisResponse;
use crate::AppState;

/// POST /api/analysis/image
///
/// Accepts a multipart form with a required `file` part plus the optional
/// text fields `cropType`, `additionalInfo` and `category`, runs the
/// prediction provider, and answers with the analysis envelope.
pub async fn analyze_image(
    mut payload: Multipart,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut crop_type: Option<String> = None;
    let mut additional_info: Option<String> = None;
    let mut category: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;

        let (name, part_filename) = {
            let disposition = field.content_disposition();
            (
                disposition.get_name().unwrap_or("").to_owned(),
                disposition.get_filename().map(str::to_owned),
            )
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            data.extend_from_slice(&chunk?);
        }

        // A part only counts as the upload when it carries a filename
        // parameter; a bare `file` text field leaves the upload missing.
        match (name.as_str(), part_filename) {
            ("file", Some(original_name)) => file = Some((original_name, data)),
            ("cropType", None) => crop_type = Some(String::from_utf8_lossy(&data).into_owned()),
            ("additionalInfo", None) => {
                additional_info = Some(String::from_utf8_lossy(&data).into_owned())
            }
            ("category", None) => category = Some(String::from_utf8_lossy(&data).into_owned()),
            _ => {}
        }
    }

    let (filename, image) = file.ok_or(ApiError::MissingFile)?;
    if filename.is_empty() {
        return Err(ApiError::EmptyFilename.into());
    }

    let crop_type = crop_type.unwrap_or_else(|| "unknown".to_owned());
    let additional_info = additional_info.unwrap_or_default();
    let category = category.unwrap_or_default();

    info!(
        "processing image {} (crop type: {}, category: {:?}, notes: {:?})",
        filename, crop_type, category, additional_info
    );

    if let Some(dir) = &state.upload_dir {
        persist_upload(dir, &filename, image.clone()).await;
    }

    let prediction = state
        .predictor
        .predict(&image, &filename, &crop_type)
        .map_err(|e| {
            error!("prediction failed for {}: {}", filename, e);
            ApiError::Prediction(e.to_string())
        })?;

    Ok(HttpResponse::Ok().json(AnalysisResponse::success(
        prediction.label,
        prediction.confidence,
        crop_type,
    )))
}

// Optional extension: keep a copy of the upload under a uuid-prefixed name.
// A failed write is logged and does not fail the analysis.
async fn persist_upload(dir: &std::path::Path, filename: &str, bytes: Vec<u8>) {
    let dest = dir.join(format!("{}_{}", Uuid::new_v4(), filename));
    let dest_for_closure = dest.clone();

    match web::block(move || std::fs::write(&dest_for_closure, &bytes)).await {
        Ok(Ok(())) => info!("saved upload to {}", dest.display()),
        Ok(Err(e)) => warn!("failed to persist upload to {}: {}", dest.display(), e),
        Err(e) => warn!("persist task for {} was cancelled: {}", dest.display(), e),
    }
}
