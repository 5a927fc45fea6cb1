mod gesture;

pub use gesture::ClickGesture;
