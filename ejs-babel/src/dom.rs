//! DOM helpers over the `markup5ever_rcdom` tree
//!
//! Parsing and serialization are delegated to `html5ever`; this module only
//! builds nodes, walks trees and reads attributes.

use crate::error::{ParserError, Result};
use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute,
    LocalName, ParseOpts, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Parse an HTML string into a document tree. Parsing is lenient and never fails.
pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(html)
}

/// Parse an HTML fragment and detach its top-level nodes.
///
/// The fragment is parsed in body context so that leading text and inline
/// markup land where an editor would have put them.
pub fn parse_fragment(fragment: &str) -> Vec<Handle> {
    if fragment.is_empty() {
        return Vec::new();
    }
    let dom = parse_html(&format!("<body>{fragment}"));
    match find_element(&dom.document, "body") {
        // Taking the children leaves the parsed body empty, so dropping the
        // parsed tree cannot tear down the nodes handed back to the caller.
        Some(body) => std::mem::take(&mut *body.children.borrow_mut()),
        None => Vec::new(),
    }
}

/// Create an HTML element with attributes
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node. Serialization escapes it.
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

pub fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Append a rich-text value as parsed markup.
pub fn append_fragment(parent: &Handle, fragment: &str) {
    parent.children.borrow_mut().extend(parse_fragment(fragment));
}

/// Append a plain value as a single escaped text node.
pub fn append_text(parent: &Handle, text: &str) {
    if !text.is_empty() {
        append(parent, create_text(text));
    }
}

/// Lowercase local name of an element, `None` for other node kinds.
pub fn tag_name(node: &Handle) -> Option<String> {
    match node.data {
        NodeData::Element { ref name, .. } => {
            let local: &str = &name.local;
            Some(local.to_ascii_lowercase())
        }
        _ => None,
    }
}

pub fn is_element(node: &Handle, tag: &str) -> bool {
    tag_name(node).is_some_and(|name| name == tag)
}

pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| {
                let local: &str = &a.name.local;
                local.eq_ignore_ascii_case(name)
            })
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Element children only, in document order.
pub fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// All descendant elements in document (pre-)order, excluding `node` itself.
pub fn descendants(node: &Handle) -> Vec<Handle> {
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = node.children.borrow().iter().rev().cloned().collect();
    while let Some(current) = stack.pop() {
        if matches!(current.data, NodeData::Element { .. }) {
            found.push(current.clone());
        }
        stack.extend(current.children.borrow().iter().rev().cloned());
    }
    found
}

/// First descendant element with the given tag name.
pub fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    descendants(node).into_iter().find(|el| is_element(el, tag))
}

/// First descendant element with the given tag whose class list holds `token`.
pub fn find_element_with_class(node: &Handle, tag: &str, token: &str) -> Option<Handle> {
    descendants(node).into_iter().find(|el| {
        is_element(el, tag)
            && attr(el, "class").is_some_and(|class| class.split_whitespace().any(|t| t == token))
    })
}

/// Concatenated text of all descendant text nodes.
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Serialized children of `node`, entities normalized like encoder output.
pub fn inner_html(node: &Handle) -> Result<String> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut output, &SerializableHandle::from(node.clone()), opts)
        .map_err(|e| ParserError::Serialization(format!("HTML serialization failed: {e}")))?;
    into_utf8(output).map(|html| decode_entities(&html))
}

/// Serialize each node including itself, joined by newlines.
pub fn outer_html(nodes: &[Handle]) -> Result<String> {
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let mut parts = Vec::with_capacity(nodes.len());
    for node in nodes {
        let mut output = Vec::new();
        serialize(&mut output, &SerializableHandle::from(node.clone()), opts.clone())
            .map_err(|e| ParserError::Serialization(format!("HTML serialization failed: {e}")))?;
        parts.push(into_utf8(output)?);
    }

    Ok(decode_entities(&parts.join("\n")))
}

fn into_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| ParserError::Serialization(format!("UTF-8 conversion failed: {e}")))
}

/// Turn serializer entities back into literal characters where that cannot
/// change the markup. `&lt;`, `&gt;`, `&amp;` and `&quot;` stay escaped.
pub fn decode_entities(html: &str) -> String {
    html.replace("&nbsp;", "\u{a0}")
}
