use dg_model::{Comment, CommentTag};
use dg_syntax::DocComment;

/// Converts a documentation comment, `None` when it carries nothing
#[must_use]
pub fn create_comment(comment: Option<&DocComment>) -> Option<Comment> {
    let comment = comment?;
    let converted = Comment {
        summary: comment.summary.trim().to_string(),
        tags: comment
            .tags
            .iter()
            .map(|tag| CommentTag {
                tag: tag.kind.as_str().to_string(),
                param_name: tag.name.clone(),
                text: tag.text.trim().to_string(),
            })
            .collect(),
    };
    (!converted.is_empty()).then_some(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_syntax::DocTag;

    #[test]
    fn test_empty_comment_is_dropped() {
        assert_eq!(create_comment(None), None);
        assert_eq!(create_comment(Some(&DocComment::default())), None);
    }

    #[test]
    fn test_tags_keep_order_and_names() {
        let mut first = DocTag::param("a", None);
        first.text = " the first ".to_string();
        let comment = DocComment {
            summary: "Adds numbers.\n".to_string(),
            tags: vec![first, DocTag::param("b", None)],
        };
        let converted = create_comment(Some(&comment)).unwrap();
        assert_eq!(converted.summary, "Adds numbers.");
        assert_eq!(converted.tags.len(), 2);
        assert_eq!(converted.tags[0].tag, "param");
        assert_eq!(converted.tags[0].param_name.as_deref(), Some("a"));
        assert_eq!(converted.tags[0].text, "the first");
        assert_eq!(converted.tags[1].param_name.as_deref(), Some("b"));
    }
}
