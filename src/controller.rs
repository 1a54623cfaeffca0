use crate::{
    api::GenerationApi,
    counter::CharCount,
    download::ImageDownloader,
    error::{ImageGenError, Result, DEFAULT_GENERATION_FAILURE},
    logger,
    models::{
        AspectRatio, CachedImage, GenerationRequest, HealthStatus, SizesResponse, Style,
        StylesResponse,
    },
    samples,
    state::FormState,
    view::FormView,
};
use rand::Rng;
use std::path::PathBuf;
use uuid::Uuid;

/// Drives the generation form: validation, the generate call, panel updates,
/// and the single cached result used by downloads.
pub struct GenerationFormController<A: GenerationApi, V: FormView> {
    api: A,
    view: V,
    downloader: ImageDownloader,
    state: FormState,
    cached_image: Option<CachedImage>,
}

impl<A: GenerationApi, V: FormView> GenerationFormController<A, V> {
    pub fn new(api: A, view: V, downloader: ImageDownloader) -> Self {
        Self {
            api,
            view,
            downloader,
            state: FormState::Idle,
            cached_image: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn cached_image(&self) -> Option<&CachedImage> {
        self.cached_image.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn on_prompt_input(&mut self, text: &str) -> CharCount {
        let count = CharCount::measure(text);
        self.view.update_counter(&count);
        count
    }

    /// Validates, calls the service, and updates the panels. The loading
    /// indicator is cleared exactly once on every path.
    pub async fn submit(
        &mut self,
        prompt: &str,
        style: Style,
        ratio: AspectRatio,
    ) -> Result<CachedImage> {
        let request = match GenerationRequest::new(prompt, style, ratio) {
            Ok(request) => request,
            Err(e) => {
                let err = ImageGenError::from(e);
                log::warn!("Rejected prompt: {}", err);
                self.reject(&err);
                self.view.hide_loading();
                return Err(err);
            }
        };

        let Some(loading) = self.state.begin() else {
            return Err(ImageGenError::Generation(
                "A generation is already in progress".into(),
            ));
        };
        self.state = loading;
        self.view.show_loading();

        let submission_id = Uuid::new_v4();
        log::info!(
            "[{}] Generating image for prompt: {}",
            submission_id,
            preview(request.prompt())
        );

        let outcome = {
            let _timer = logger::timer(&format!("generate {}", submission_id));
            self.request_image(&request).await
        };

        match &outcome {
            Ok(image) => {
                log::info!("[{}] Generation succeeded", submission_id);
                self.cached_image = Some(image.clone());
                self.state = self.state.succeed().unwrap_or(FormState::Success);
                self.view.show_result(&image.data_url(), &image.alt_text());
            }
            Err(e) => {
                log::error!("[{}] Generation failed: {}", submission_id, e);
                self.state = self.state.fail().unwrap_or(FormState::Error);
                self.view.show_error(&e.user_message());
            }
        }

        self.view.hide_loading();
        outcome
    }

    async fn request_image(&self, request: &GenerationRequest) -> Result<CachedImage> {
        let response = self.api.generate(request).await?;
        let succeeded = response.is_ok() && response.body.success;
        let body = response.body;

        if !succeeded {
            log::debug!("Service answered {} with success={}", response.status, body.success);
            let message = body
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GENERATION_FAILURE.to_string());
            return Err(ImageGenError::Generation(message));
        }

        let image = body
            .image
            .filter(|data| !data.trim().is_empty())
            .ok_or_else(|| ImageGenError::Generation(DEFAULT_GENERATION_FAILURE.to_string()))?;
        let prompt = body.prompt.unwrap_or_else(|| request.prompt().to_string());

        Ok(CachedImage::new(image, prompt))
    }

    /// Writes the cached image to disk. With nothing cached, reports
    /// `NoImage` and creates no file.
    pub fn download(&mut self) -> Result<PathBuf> {
        let result = match &self.cached_image {
            Some(image) => self.downloader.save(image),
            None => Err(ImageGenError::NoImage),
        };

        if let Err(e) = &result {
            log::error!("Download error: {}", e);
            self.reject(e);
        }
        result
    }

    pub fn insert_sample_prompt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        let prompt = samples::pick_sample(rng);
        self.view.set_prompt(prompt);
        self.on_prompt_input(prompt);
        prompt
    }

    /// Logs the service health. Never surfaces anything to the view.
    pub async fn check_health(&self) -> Option<serde_json::Value> {
        match self.api.health().await {
            Ok(status) => {
                log::info!("API Health: {}", status);
                if let Ok(health) = serde_json::from_value::<HealthStatus>(status.clone()) {
                    log::debug!(
                        "Service {} v{} reports {}",
                        health.service.as_deref().unwrap_or("unknown"),
                        health.version.as_deref().unwrap_or("?"),
                        health.status.as_deref().unwrap_or("no status")
                    );
                }
                Some(status)
            }
            Err(e) => {
                log::error!("Health check failed: {}", e);
                None
            }
        }
    }

    pub async fn list_styles(&self) -> Result<StylesResponse> {
        let styles = self.api.styles().await?;
        log::debug!("Service offers {} styles", styles.styles.len());
        Ok(styles)
    }

    pub async fn list_sizes(&self) -> Result<SizesResponse> {
        let sizes = self.api.sizes().await?;
        log::debug!("Service offers {} sizes", sizes.sizes.len());
        Ok(sizes)
    }

    fn reject(&mut self, error: &ImageGenError) {
        if let Some(next) = self.state.reject() {
            self.state = next;
        }
        self.view.show_error(&error.user_message());
    }
}

fn preview(prompt: &str) -> String {
    const PREVIEW_CHARS: usize = 50;
    if prompt.chars().count() > PREVIEW_CHARS {
        format!("{}...", prompt.chars().take(PREVIEW_CHARS).collect::<String>())
    } else {
        prompt.to_string()
    }
}
