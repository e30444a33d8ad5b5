//! Builds a small page and writes it to the path given as the first argument, or to
//! standard output when no argument is given.
//!
//! Run with `RUST_LOG=htmldoc=debug` to see where the page is written.

use std::path::PathBuf;

use htmldoc::{bumpalo::Bump, builder::Builder, Document, OutputError};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), OutputError> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish()
        .init();

    let output = std::env::args_os().nth(1).map(PathBuf::from);

    let bump = Bump::new();
    let b = Builder::new(&bump);
    Document::build(&bump, output, |doc| {
        let mut head = b.head();
        head.append_child(b.title([]).with_text("hello"));
        doc.append_child(head);

        let mut body = b.body();
        body.append_child(b.h1([b.class(["main-text"])]).with_text("Test"));

        let mut div = b.div([b.class(["container", "container-fluid"]), b.attr(("id", "lead"))]);
        div.append_child(b.p([]).with_childlevel(1).with_text("another test"))
            .append_child(
                b.img([b.attr(("src", "/icon.png")), b.attr(("data_image", "responsive"))])
                    .with_childlevel(1),
            );
        body.append_child(div);
        doc.append_child(body);

        Ok(())
    })
}
