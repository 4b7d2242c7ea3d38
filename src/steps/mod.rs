/// Cooking-step segmentation
///
/// Splits free-form cooking instructions into sentences, groups the
/// sentences into numbered steps, and formats/unformats the step view.
/// Everything in here is a pure transform over strings. Nothing is
/// persisted; only the label-stripped text goes back to the database.

pub mod grouper;
pub mod renderer;
pub mod splitter;

pub use grouper::{group_into_steps, SENTENCES_PER_STEP};
pub use renderer::{render_steps, strip_step_labels};
pub use splitter::split_into_sentences;

/// Full display pipeline: raw cooking process text to the labeled,
/// line-per-sentence step view.
pub fn render_cooking_process(text: &str) -> String {
    let sentences = split_into_sentences(text);
    let steps = group_into_steps(&sentences);
    render_steps(&steps)
}
