use axum::{routing::get, Router};
use foliage::{Attributes, LeafNode, Node, Page};

#[tokio::main]
async fn main() {
    // initialize tracing
    tracing_subscriber::fmt::init();

    // build our application with a route
    let app = Router::new().route("/", get(root));

    // run our app with hyper, listening globally on port 3000
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn root() -> Page {
    Page(Node::parent(
        "div",
        vec![
            Node::leaf("h1", "Hello"),
            Node::Leaf(LeafNode::new(
                Some("img"),
                None,
                Some(Attributes::from([("src", "/logo.png"), ("alt", "logo")])),
            )),
            Node::parent("p", vec![Node::text("Rendered from a node tree.")]),
        ],
    ))
}
