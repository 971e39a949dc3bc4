// HTML parsing helpers used around the extraction backend.
//
// The backend does its own parsing; this module only answers questions the
// backend does not: how many elements a document has, whether it holds any
// readable text at all, and rewriting documents nested too deeply to walk.

use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever::serialize::TraversalScope;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::error::ExtractError;
use crate::text::visible_len;

/// Elements nested deeper than this are dropped before extraction.
pub(crate) const MAX_DEPTH: usize = 128;

/// Parse an HTML string into an html5ever RcDom.
pub(crate) fn parse_html(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

/// Get the local tag name of an element node.
pub(crate) fn tag_name(handle: &Handle) -> Option<&str> {
    if let NodeData::Element { ref name, .. } = handle.data {
        Some(name.local.as_ref())
    } else {
        None
    }
}

/// Count element nodes in the tree without recursion.
pub(crate) fn count_elements(root: &Handle) -> usize {
    let mut count = 0;
    let mut stack = vec![root.clone()];
    while let Some(handle) = stack.pop() {
        if matches!(handle.data, NodeData::Element { .. }) {
            count += 1;
        }
        stack.extend(handle.children.borrow().iter().cloned());
    }
    count
}

/// Whether any text outside `<head>`, scripts and styles is visible.
pub(crate) fn has_visible_text(root: &Handle) -> bool {
    let mut stack = vec![root.clone()];
    while let Some(handle) = stack.pop() {
        match handle.data {
            NodeData::Text { ref contents } => {
                if visible_len(&contents.borrow()) > 0 {
                    return true;
                }
            }
            NodeData::Element { .. } => {
                if matches!(
                    tag_name(&handle),
                    Some("head" | "script" | "style" | "noscript" | "template")
                ) {
                    continue;
                }
                stack.extend(handle.children.borrow().iter().cloned());
            }
            NodeData::Document => stack.extend(handle.children.borrow().iter().cloned()),
            _ => {}
        }
    }
    false
}

/// Drop every node below `max_depth`. Returns whether anything was dropped.
pub(crate) fn truncate_depth(root: &Handle, max_depth: usize) -> bool {
    let mut truncated = false;
    let mut stack = vec![(root.clone(), 0usize)];
    while let Some((handle, depth)) = stack.pop() {
        if depth >= max_depth {
            truncated |= !handle.children.borrow().is_empty();
            handle.children.borrow_mut().clear();
            continue;
        }
        stack.extend(
            handle
                .children
                .borrow()
                .iter()
                .map(|child| (child.clone(), depth + 1)),
        );
    }
    truncated
}

/// Serialize a parsed document back to HTML.
pub(crate) fn to_html(dom: &RcDom) -> Result<String, ExtractError> {
    let mut out = Vec::new();
    let document: SerializableHandle = dom.document.clone().into();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut out, &document, opts).map_err(ExtractError::Rewrite)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
