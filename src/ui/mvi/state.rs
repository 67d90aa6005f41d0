/// Everything one screen needs to render.
///
/// `Default` is the initial screen; `PartialEq` lets tests compare whole
/// states before and after an intent.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
