//! Render plans for a form's result container.
//!
//! A plan is the complete, ordered content of the container. The view replaces
//! whatever was shown before with the blocks of the latest plan, so success and
//! error output never pile up.

use crate::model::form::ResultLayout;
use crate::model::result::SubmissionResult;

pub const SUGGESTIONS_HEADING: &str = "Suggestions:";
pub const OUTFIT_ALT: &str = "Outfit suggestion";
pub const COMPOSITE_ALT: &str = "Composite outfit";
pub const ERROR_PREFIX: &str = "Error: ";

/// One element of a result container.
///
/// All text is plain text; the view inserts it as text nodes, never as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    List(Vec<String>),
    Image { src: String, alt: String },
    Message(String),
}

/// Plan for a success: heading, list and image(s) in `layout` order.
///
/// The suggestions-first list is always present, even when empty. The
/// composite layout adds heading and list only when there are suggestions.
pub fn suggestion_blocks(
    suggestions: &[String],
    image_url: Option<&str>,
    composite_url: Option<&str>,
    layout: ResultLayout,
) -> Vec<Block> {
    let heading = Block::Heading(SUGGESTIONS_HEADING.to_string());
    let list = Block::List(suggestions.to_vec());
    let outfit = image_url.map(|src| image(src, OUTFIT_ALT));
    let composite = composite_url.map(|src| image(src, COMPOSITE_ALT));

    let mut blocks = Vec::with_capacity(4);
    match layout {
        ResultLayout::SuggestionsFirst => {
            blocks.push(heading);
            blocks.push(list);
            blocks.extend(composite);
            blocks.extend(outfit);
        }
        ResultLayout::CompositeFirst => {
            blocks.extend(composite);
            if !suggestions.is_empty() {
                blocks.push(heading);
                blocks.push(list);
            }
            blocks.extend(outfit);
        }
    }
    blocks
}

/// Plan for a failure: a single prefixed message.
pub fn error_blocks(message: &str) -> Vec<Block> {
    vec![Block::Message(format!("{ERROR_PREFIX}{message}"))]
}

/// Dispatches a result to the success or error plan.
pub fn blocks_for(result: &SubmissionResult, layout: ResultLayout) -> Vec<Block> {
    match result {
        SubmissionResult::Success {
            suggestions,
            image_url,
            composite_url,
        } => suggestion_blocks(
            suggestions,
            image_url.as_deref(),
            composite_url.as_deref(),
            layout,
        ),
        SubmissionResult::Failure { message } => error_blocks(message),
    }
}

fn image(src: &str, alt: &str) -> Block {
    Block::Image {
        src: src.to_string(),
        alt: alt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::FormKind;

    fn success(
        suggestions: &[&str],
        image_url: Option<&str>,
        composite_url: Option<&str>,
    ) -> SubmissionResult {
        SubmissionResult::Success {
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            image_url: image_url.map(str::to_string),
            composite_url: composite_url.map(str::to_string),
        }
    }

    fn count_images(blocks: &[Block]) -> usize {
        blocks.iter().filter(|b| matches!(b, Block::Image { .. })).count()
    }

    #[test]
    fn every_form_renders_one_heading_and_ordered_list() {
        let result = success(&["A", "B"], None, None);
        for kind in FormKind::ALL {
            let blocks = blocks_for(&result, kind.layout());
            let headings = blocks.iter().filter(|b| matches!(b, Block::Heading(_))).count();
            assert_eq!(headings, 1);
            let lists: Vec<_> = blocks
                .iter()
                .filter_map(|b| match b {
                    Block::List(items) => Some(items.clone()),
                    _ => None,
                })
                .collect();
            assert_eq!(lists, vec![vec!["A".to_string(), "B".to_string()]]);
        }
    }

    #[test]
    fn image_url_renders_exactly_one_image() {
        let blocks = blocks_for(
            &success(&["A"], Some("/o.png"), None),
            ResultLayout::SuggestionsFirst,
        );
        assert_eq!(count_images(&blocks), 1);
        assert_eq!(
            blocks.last(),
            Some(&Block::Image {
                src: "/o.png".to_string(),
                alt: OUTFIT_ALT.to_string()
            })
        );

        let blocks = blocks_for(&success(&["A"], None, None), ResultLayout::SuggestionsFirst);
        assert_eq!(count_images(&blocks), 0);
    }

    #[test]
    fn composite_comes_before_suggestions() {
        let blocks = blocks_for(
            &success(&["A"], None, Some("/c.png")),
            ResultLayout::CompositeFirst,
        );
        assert_eq!(
            blocks,
            vec![
                Block::Image {
                    src: "/c.png".to_string(),
                    alt: COMPOSITE_ALT.to_string()
                },
                Block::Heading(SUGGESTIONS_HEADING.to_string()),
                Block::List(vec!["A".to_string()]),
            ]
        );
    }

    #[test]
    fn empty_suggestions_keep_the_list() {
        let blocks = blocks_for(&success(&[], None, None), ResultLayout::SuggestionsFirst);
        assert_eq!(
            blocks,
            vec![
                Block::Heading(SUGGESTIONS_HEADING.to_string()),
                Block::List(vec![])
            ]
        );
    }

    #[test]
    fn composite_without_suggestions_is_only_the_image() {
        let blocks = blocks_for(
            &success(&[], None, Some("/c.png")),
            ResultLayout::CompositeFirst,
        );
        assert_eq!(
            blocks,
            vec![Block::Image {
                src: "/c.png".to_string(),
                alt: COMPOSITE_ALT.to_string()
            }]
        );

        let blocks = blocks_for(&success(&[], None, None), ResultLayout::CompositeFirst);
        assert!(blocks.is_empty());
    }

    #[test]
    fn duplicates_and_markup_are_kept_verbatim() {
        let blocks = blocks_for(
            &success(&["<b>x</b>", "<b>x</b>"], None, None),
            ResultLayout::SuggestionsFirst,
        );
        assert_eq!(
            blocks[1],
            Block::List(vec!["<b>x</b>".to_string(), "<b>x</b>".to_string()])
        );
    }

    #[test]
    fn failures_render_a_single_prefixed_message() {
        let blocks = blocks_for(
            &SubmissionResult::failure("too large"),
            ResultLayout::SuggestionsFirst,
        );
        assert_eq!(blocks, vec![Block::Message("Error: too large".to_string())]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let result = success(&["A", "B"], Some("/o.png"), None);
        let first = blocks_for(&result, ResultLayout::SuggestionsFirst);
        let second = blocks_for(&result, ResultLayout::SuggestionsFirst);
        assert_eq!(first, second);
    }

    #[test]
    fn a_new_plan_carries_nothing_from_the_previous_one() {
        let before = blocks_for(
            &success(&["old"], Some("/old.png"), None),
            ResultLayout::SuggestionsFirst,
        );
        let after = blocks_for(&success(&["new"], None, None), ResultLayout::SuggestionsFirst);
        assert!(after.iter().all(|b| !before.contains(b) || matches!(b, Block::Heading(_))));
        assert_eq!(count_images(&after), 0);
    }
}
