use std::sync::Arc;

use crate::application::ports::{
    ArchiveWriter, ImageTranscoder, LengthExtensionClient, NameListParser, PageSplitter,
};
use crate::application::services::SplitService;
use crate::presentation::config::Settings;

pub struct AppState<N, S, W, T, X>
where
    N: NameListParser,
    S: PageSplitter,
    W: ArchiveWriter,
    T: ImageTranscoder,
    X: LengthExtensionClient,
{
    pub split_service: Arc<SplitService<N, S, W>>,
    pub image_transcoder: Arc<T>,
    pub lea_client: Arc<X>,
    pub settings: Settings,
}

impl<N, S, W, T, X> Clone for AppState<N, S, W, T, X>
where
    N: NameListParser,
    S: PageSplitter,
    W: ArchiveWriter,
    T: ImageTranscoder,
    X: LengthExtensionClient,
{
    fn clone(&self) -> Self {
        Self {
            split_service: Arc::clone(&self.split_service),
            image_transcoder: Arc::clone(&self.image_transcoder),
            lea_client: Arc::clone(&self.lea_client),
            settings: self.settings.clone(),
        }
    }
}
