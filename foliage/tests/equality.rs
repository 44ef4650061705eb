use foliage::{Attributes, HtmlNode, LeafNode, Node, ParentNode};

fn container() -> Option<Attributes> {
    Some(Attributes::from([("class", "container")]))
}

#[test]
fn html_nodes_with_same_fields_are_equal() {
    let node = HtmlNode::new(Some("div"), Some("This is a div"), None, container());
    let node2 = HtmlNode::new(Some("div"), Some("This is a div"), None, container());
    assert_eq!(node, node2);
}

#[test]
fn html_nodes_with_different_tags_are_not_equal() {
    let node = HtmlNode::new(Some("div"), Some("This is a div"), None, container());
    let node2 = HtmlNode::new(Some("span"), Some("This is a span"), None, container());
    assert_ne!(node, node2);
}

#[test]
fn leaves_constructed_separately_are_equal() {
    let node = LeafNode::new(Some("div"), Some("This is a div"), container());
    let node2 = LeafNode::new(Some("div"), Some("This is a div"), container());
    assert_eq!(node, node2);
}

#[test]
fn leaves_with_different_tags_are_not_equal() {
    let node = LeafNode::new(Some("div"), Some("This is a div"), container());
    let node2 = LeafNode::new(Some("span"), Some("This is a span"), container());
    assert_ne!(node, node2);
}

#[test]
fn leaf_and_bare_node_with_same_fields_are_not_equal() {
    let leaf = Node::Leaf(LeafNode::new(Some("div"), Some("This is a div"), container()));
    let bare = Node::Html(HtmlNode::new(
        Some("div"),
        Some("This is a div"),
        None,
        container(),
    ));
    assert_ne!(leaf, bare);
}

#[test]
fn parent_equality_recurses_into_children() {
    let a = Node::parent("div", vec![Node::leaf("span", "child")]);
    let b = Node::parent("div", vec![Node::leaf("span", "child")]);
    let c = Node::parent("div", vec![Node::leaf("span", "other")]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn child_order_matters() {
    let a = Node::parent("div", vec![Node::leaf("b", "x"), Node::leaf("i", "y")]);
    let b = Node::parent("div", vec![Node::leaf("i", "y"), Node::leaf("b", "x")]);
    assert_ne!(a, b);
}

#[test]
fn debug_formats_fields_structurally() {
    let node = HtmlNode::new(Some("div"), Some("This is a div"), None, container());
    assert_eq!(
        format!("{:?}", node),
        "HtmlNode(tag=Some(\"div\"), value=Some(\"This is a div\"), children=None, \
         attributes=Some(Attributes([(\"class\", \"container\")])))"
    );

    let leaf = LeafNode::new(Some("p"), Some("hi"), None);
    assert_eq!(
        format!("{:?}", leaf),
        "LeafNode(tag=Some(\"p\"), value=Some(\"hi\"), attributes=None)"
    );
}

#[test]
fn node_debug_delegates_to_the_variant() {
    let parent = Node::Parent(ParentNode::new(Some("div"), Some(vec![]), None));
    assert_eq!(
        format!("{:?}", parent),
        "ParentNode(tag=Some(\"div\"), children=Some([]), attributes=None)"
    );
}
