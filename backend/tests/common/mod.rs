//! Common test utilities.

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use axum::http::{Request, StatusCode};
use backend::DocsConfig;
use http_body_util::BodyExt;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

pub const MANIFEST: &str = r#"{
    "agent_name": "sql_agent",
    "description": "Answers questions about a warehouse",
    "version": "0.2.0",
    "tools": [
        {
            "name": "list_columns",
            "description": "List the columns of a table",
            "parameters": {"table": {"type": "string", "description": "Table name"}},
            "required": ["table"]
        },
        {
            "name": "run_query",
            "description": "Run a read-only query",
            "parameters": {"sql": {"type": "string", "description": "Statement"}},
            "required": ["sql"],
            "returns": {"type": "object", "properties": {"rows": {"type": "array"}}}
        }
    ]
}"#;

/// On-disk layout mirroring a project checkout:
/// `agent_manifest.json`, `docs/`, `examples/`, `configs/agents/` and a
/// `secret.txt` next to them that must never be served.
pub struct Workspace {
    pub tmp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let ws = Self { tmp };
        ws.write("agent_manifest.json", MANIFEST);
        ws.write("docs/getting_started.md", "# Getting started\n\nRun <the> agent & relax.");
        ws.write("docs/architecture.md", "# Architecture");
        ws.write("docs/notes.txt", "not a page");
        ws.write("examples/basic.py", "print('basic')");
        ws.write("examples/advanced/planner.py", "print('planner')");
        ws.write("configs/agents/sql_agent.yaml", "name: sql_agent\n");
        ws.write("secret.txt", "top secret");
        ws
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.root().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    pub fn config(&self) -> DocsConfig {
        let root = self.root();
        DocsConfig {
            manifest_path: root.join("agent_manifest.json"),
            reference_dir: root.join("docs/sphinx/build/html"),
            pages_dir: root.join("docs"),
            examples_dir: root.join("examples"),
            configs_dir: root.join("configs/agents"),
        }
    }

    pub fn app(&self) -> Router {
        backend::init(Router::new(), &self.config())
    }
}

pub async fn send(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = send(app, uri).await;
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
