/// Marker for screen state: everything needed to render, cheap to compare.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
