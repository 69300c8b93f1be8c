//! Integration tests for rendering through a host.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use texdoc::model::{GraphValue, PageTitle, PieChart, TextTitle};
use texdoc::{DocumentBuilder, DocumentOptions, Error, FontSize, Host, Manifest};

/// Mock host that records invocations instead of spawning processes.
#[derive(Clone)]
struct MockHost {
    exit_code: i32,
    fail_launch: bool,
    fail_viewer: bool,
    runs: Rc<RefCell<Vec<Vec<String>>>>,
    viewed: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockHost {
    fn exiting_with(exit_code: i32) -> Self {
        Self {
            exit_code,
            fail_launch: false,
            fail_viewer: false,
            runs: Rc::new(RefCell::new(Vec::new())),
            viewed: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl Host for MockHost {
    fn run(&self, _program: &Path, args: &[String]) -> io::Result<i32> {
        if self.fail_launch {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such program"));
        }
        self.runs.borrow_mut().push(args.to_vec());
        Ok(self.exit_code)
    }

    fn open_for_viewing(&self, path: &Path) -> io::Result<()> {
        if self.fail_viewer {
            return Err(io::Error::new(io::ErrorKind::Other, "no display"));
        }
        self.viewed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

#[test]
fn test_render_writes_complete_document() {
    let temp = tempfile::tempdir().unwrap();
    let host = MockHost::exiting_with(0);
    let mut doc = DocumentBuilder::new("pdflatex", temp.path().join("out"))
        .unwrap()
        .with_host(host.clone());

    doc.add_page_title(&PageTitle::new("Report")).unwrap();
    doc.add_text_title(&TextTitle::new("Section").with_size(FontSize::Large))
        .unwrap();
    let expected = doc.to_string();

    let outcome = doc.render(Some("report")).unwrap();

    assert_eq!(fs::read_to_string(&outcome.source).unwrap(), expected);
    assert_eq!(outcome.source.file_name().unwrap(), "report.tex");
    assert_eq!(outcome.artifact.file_name().unwrap(), "report.pdf");
    assert_eq!(host.runs.borrow().len(), 1);
    assert_eq!(*host.viewed.borrow(), vec![outcome.artifact.clone()]);
}

#[test]
fn test_nonzero_exit_is_not_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let host = MockHost::exiting_with(2);
    let mut doc = DocumentBuilder::new("pdflatex", temp.path().join("out"))
        .unwrap()
        .with_host(host.clone());

    let outcome = doc.render(Some("bad")).unwrap();

    assert_eq!(outcome.exit_code, 2);
    assert!(!outcome.success());
    assert!(host.viewed.borrow().is_empty());
}

#[test]
fn test_launch_failure_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let mut host = MockHost::exiting_with(0);
    host.fail_launch = true;
    let mut doc = DocumentBuilder::new("pdflatex", temp.path().join("out"))
        .unwrap()
        .with_host(host);

    let result = doc.render(Some("x"));
    assert!(matches!(result, Err(Error::RendererLaunch { .. })));
}

#[test]
fn test_viewer_failure_is_not_fatal() {
    let temp = tempfile::tempdir().unwrap();
    let mut host = MockHost::exiting_with(0);
    host.fail_viewer = true;
    let mut doc = DocumentBuilder::new("pdflatex", temp.path().join("out"))
        .unwrap()
        .with_host(host);

    let outcome = doc.render(Some("x")).unwrap();
    assert!(outcome.success());
    assert!(!outcome.opened);
}

#[test]
fn test_second_render_lacks_fresh_preamble() {
    let temp = tempfile::tempdir().unwrap();
    let mut doc = DocumentBuilder::new("pdflatex", temp.path().join("out"))
        .unwrap()
        .with_host(MockHost::exiting_with(0));

    doc.render(Some("first")).unwrap();
    doc.add_raw_text("late");
    let second = doc.render(Some("second")).unwrap();

    let written = fs::read_to_string(&second.source).unwrap();
    assert_eq!(written.matches("\\begin{document}").count(), 1);
    assert_eq!(written.matches("\\end{document}").count(), 2);
    assert!(doc.is_finalized());

    doc.recreate(None);
    assert!(!doc.is_finalized());
    assert!(!doc.to_string().contains("late"));
}

#[test]
fn test_manifest_render_with_mock_host() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = Manifest::from_json(
        r#"{
            "options": {"margins": {"top": 1, "bottom": 1, "left": 0.5, "right": 0.5},
                        "open_artifact": false},
            "steps": [
                {"type": "page_title", "title": "Poll", "author": "Team"},
                {"type": "begin_center"},
                {"type": "pie_chart", "values": [
                    {"label": "Yes", "value": 2, "color": "green"},
                    {"label": "No", "value": 1, "color": "red"}
                ]},
                {"type": "end_center"}
            ]
        }"#,
    )
    .unwrap();

    let host = MockHost::exiting_with(0);
    let mut doc = manifest
        .build("pdflatex", temp.path().join("out"))
        .unwrap()
        .with_host(host.clone());
    let outcome = doc.render(Some("poll")).unwrap();

    let written = fs::read_to_string(&outcome.source).unwrap();
    assert!(written.contains("top=1in,bottom=1in,right=0.5in,left=0.5in"));
    assert!(written.contains("\\begin{center}\n\\begin{tikzpicture}"));
    assert!(written.contains("\\pie[color={green,red}]{66/Yes,33/No}"));
    assert!(!outcome.opened);
    assert!(host.viewed.borrow().is_empty());
    assert_eq!(outcome.stats.chart_count, 1);
}

#[test]
fn test_manifest_stops_at_failing_step() {
    let temp = tempfile::tempdir().unwrap();
    let mut manifest = Manifest::new(DocumentOptions::default());
    manifest.push(texdoc::ContentElement::from(PieChart::new(vec![
        GraphValue::new("None", 0),
    ])));

    let result = manifest.build("pdflatex", temp.path().join("out"));
    assert!(matches!(result, Err(Error::Arithmetic(_))));
}
