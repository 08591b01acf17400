use crate::error::{ServerError, ServerResult};
use crate::pages;
use crate::state::AppState;
use axum::extract::{Multipart, State};
use axum::response::Html;
use recognize_client::prelude::*;
use recognize_client::utils::id::id_or_generate;

/// Fields of an upload form
#[derive(Debug, Default)]
struct UploadForm {
    id: Option<String>,
    name: Option<String>,
    upload: Option<Vec<u8>>,
    multi: bool,
    all_results: bool,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> ServerResult<Self> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "upload" => form.upload = Some(field.bytes().await?.to_vec()),
                "id" => form.id = Some(field.text().await?),
                "name" => form.name = Some(field.text().await?),
                "multi" => form.multi = checked(&field.text().await?),
                "allResults" => form.all_results = checked(&field.text().await?),
                other => debug!("Ignoring form field {}", other),
            }
        }
        Ok(form)
    }

    fn upload(&mut self) -> ServerResult<Vec<u8>> {
        self.upload
            .take()
            .filter(|bytes| !bytes.is_empty())
            .ok_or(ServerError::MissingField("upload"))
    }
}

fn checked(value: &str) -> bool {
    !matches!(value.trim(), "" | "off" | "false" | "0")
}

/// Forms page
pub async fn start() -> Html<String> {
    info!("Request handler 'start' was called");
    Html(pages::start_page())
}

/// Recognizes the uploaded image; answers with the matched id or the error message
pub async fn recognize(State(state): State<AppState>, multipart: Multipart) -> ServerResult<String> {
    info!("Request handler 'recognize' was called");
    let mut form = UploadForm::read(multipart).await?;
    let image = form.upload()?;

    let options = if form.multi {
        RecognizeOptions::multi()
    } else {
        RecognizeOptions::single()
    }
    .with_all_results(form.all_results);

    let result = state.client.recognize(&image, options).await?;
    Ok(result.summary())
}

/// Adds the uploaded image to the collection
pub async fn image_insert(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ServerResult<Html<&'static str>> {
    info!("Request handler 'imageInsert' was called");
    let mut form = UploadForm::read(multipart).await?;
    let image = form.upload()?;
    let id = id_or_generate(form.id.as_deref());
    let name = form.name.take().unwrap_or_else(|| id.clone());

    state.client.image_insert(&id, &name, &image).await?;
    Ok(Html("Image uploaded!"))
}

/// Index status
pub async fn status(State(state): State<AppState>) -> ServerResult<Html<String>> {
    info!("Request handler 'status' was called");
    let data = state.client.index_status().await?;
    Ok(Html(pages::payload(&data)))
}

/// Starts an index build
pub async fn build(State(state): State<AppState>) -> ServerResult<Html<String>> {
    info!("Request handler 'build' was called");
    let data = state.client.index_build().await?;
    Ok(Html(pages::build_page(&data)))
}

/// Image collection table
pub async fn list(State(state): State<AppState>) -> ServerResult<Html<String>> {
    info!("Request handler 'list' was called");
    let data = state.client.image_list().await?;
    Ok(Html(pages::image_table(&images_from_list(&data))))
}
