use common::model::result::SubmissionResult;

#[derive(Clone)]
pub enum Msg {
    /// The form was submitted; default navigation is already suppressed.
    Submit,
    FilesSelected {
        field: String,
        files: Vec<web_sys::File>,
    },
    /// Request `sequence` settled with `result`.
    Settled {
        sequence: u64,
        result: SubmissionResult,
    },
}
