/// Marker for intents: key presses, service results, navigation hand-offs.
pub trait Intent: Send + 'static {}
