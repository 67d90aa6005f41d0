/// Something that happened: a user edit, a focus move, a request outcome,
/// a timer tick.
pub trait Intent: Send + 'static {}
