//! Per-screenshot classification result.
//!
//! [`FrameBuilder::parse`] fetches (or replays) the OCR response for one
//! screenshot, detects the frame type and buckets every line by category.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::classify::{contains_han_script, FrameTypeDetector, LineClassifier, ScreenLayout};
use crate::error::Result;
use crate::ocr::{Line, OcrResponse, OcrResultCache, Transport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dialogue,
    Mission,
    Choice,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameType {
    /// In-world terminal overlay
    Console,
    Normal,
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameType::Console => write!(f, "console"),
            FrameType::Normal => write!(f, "normal"),
        }
    }
}

/// Lines of one screenshot grouped by category, in source order.
///
/// `others` keeps only unclassified lines that contain Han script. Only
/// [`build_frame`] fills a frame; afterwards it is read through accessors.
///
/// ```compile_fail
/// use cyberpunk_ocr::{Frame, FrameType};
///
/// fn retag(frame: &mut Frame) {
///     frame.frame_type = FrameType::Console;
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    frame_type: FrameType,
    dialogues: Vec<Line>,
    missions: Vec<Line>,
    choices: Vec<Line>,
    others: Vec<Line>,
}

fn contents(lines: &[Line]) -> Vec<String> {
    lines.iter().map(|line| line.content.clone()).collect()
}

impl Frame {
    fn empty(frame_type: FrameType) -> Self {
        Self {
            frame_type,
            dialogues: Vec::new(),
            missions: Vec::new(),
            choices: Vec::new(),
            others: Vec::new(),
        }
    }

    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    pub fn lines(&self, category: Category) -> &[Line] {
        match category {
            Category::Dialogue => &self.dialogues,
            Category::Mission => &self.missions,
            Category::Choice => &self.choices,
            Category::Other => &self.others,
        }
    }

    pub fn dialogue_texts(&self) -> Vec<String> {
        contents(&self.dialogues)
    }

    pub fn mission_texts(&self) -> Vec<String> {
        contents(&self.missions)
    }

    pub fn choice_texts(&self) -> Vec<String> {
        contents(&self.choices)
    }

    pub fn other_texts(&self) -> Vec<String> {
        contents(&self.others)
    }

    fn push(&mut self, category: Category, line: Line) {
        match category {
            Category::Dialogue => self.dialogues.push(line),
            Category::Mission => self.missions.push(line),
            Category::Choice => self.choices.push(line),
            Category::Other => {
                if contains_han_script(&line.content) {
                    self.others.push(line);
                }
            }
        }
    }
}

/// Classifies an already fetched response. Any malformed line fails the
/// whole frame.
pub fn build_frame(
    response: &OcrResponse,
    classifier: &LineClassifier,
    detector: &FrameTypeDetector,
) -> Result<Frame> {
    let mut frame = Frame::empty(detector.detect(response)?);
    for line in response.lines() {
        let category = classifier.classify(line)?;
        frame.push(category, line.clone());
    }
    Ok(frame)
}

pub struct FrameBuilder<T: Transport> {
    cache: OcrResultCache<T>,
    classifier: LineClassifier,
    detector: FrameTypeDetector,
}

impl<T: Transport> FrameBuilder<T> {
    pub fn new(cache: OcrResultCache<T>, layout: ScreenLayout) -> Self {
        Self {
            cache,
            detector: FrameTypeDetector::new(layout.console.clone()),
            classifier: LineClassifier::new(layout),
        }
    }

    pub fn cache(&self) -> &OcrResultCache<T> {
        &self.cache
    }

    pub fn parse(&self, image_path: &Path) -> Result<Frame> {
        let response = self.cache.get(image_path)?;
        let frame = build_frame(&response, &self.classifier, &self.detector)?;

        crate::log(&format!(
            "{}: {} frame, {} dialogue, {} mission, {} choice, {} other",
            image_path.display(),
            frame.frame_type,
            frame.dialogues.len(),
            frame.missions.len(),
            frame.choices.len(),
            frame.others.len()
        ));
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ocr::{AiVisionClient, AnalyzeRequest, Page, RawResponse, ReadResult};
    use std::cell::Cell;
    use std::fs;
    use tempfile::tempdir;

    fn boxed(x: f64, y: f64, w: f64, h: f64) -> [f64; 8] {
        [x, y, x + w, y, x + w, y + h, x, y + h]
    }

    fn response(lines: Vec<Line>) -> OcrResponse {
        OcrResponse {
            read_result: ReadResult {
                pages: vec![Page { lines }],
            },
        }
    }

    fn build(lines: Vec<Line>) -> Result<Frame> {
        build_frame(
            &response(lines),
            &LineClassifier::default(),
            &FrameTypeDetector::default(),
        )
    }

    #[test]
    fn test_lines_are_bucketed_in_order() {
        let frame = build(vec![
            Line::new("是法兰克福的事吗?", boxed(1500.0, 1450.0, 600.0, 60.0)),
            Line::new("T-Bug:不错", boxed(1200.0, 1900.0, 800.0, 70.0)),
            Line::new("前往来生酒吧", boxed(3044.0, 716.0, 600.0, 50.0)),
            Line::new("我没时间弄这个", boxed(1500.0, 1550.0, 500.0, 60.0)),
            Line::new("杰克:走吧", boxed(1200.0, 1980.0, 500.0, 70.0)),
        ])
        .unwrap();

        assert_eq!(frame.frame_type, FrameType::Normal);
        assert_eq!(frame.choice_texts(), vec!["是法兰克福的事吗?", "我没时间弄这个"]);
        assert_eq!(frame.dialogue_texts(), vec!["T-Bug:不错", "杰克:走吧"]);
        assert_eq!(frame.mission_texts(), vec!["前往来生酒吧"]);
        assert!(frame.others.is_empty());
    }

    #[test]
    fn test_other_keeps_only_han_lines() {
        let frame = build(vec![
            Line::new("100", boxed(10.0, 10.0, 50.0, 20.0)),
            Line::new("夜之城", boxed(10.0, 40.0, 80.0, 20.0)),
            Line::new("R3", boxed(10.0, 70.0, 30.0, 20.0)),
        ])
        .unwrap();

        assert_eq!(frame.other_texts(), vec!["夜之城"]);
        assert_eq!(frame.lines(Category::Other).len(), 1);
    }

    #[test]
    fn test_buckets_are_disjoint() {
        let lines = vec![
            Line::new("是法兰克福的事吗?", boxed(1500.0, 1450.0, 600.0, 60.0)),
            Line::new("T-Bug:不错", boxed(1200.0, 1900.0, 800.0, 70.0)),
            Line::new("前往来生酒吧", boxed(3044.0, 716.0, 600.0, 50.0)),
            Line::new("夜之城", boxed(10.0, 40.0, 80.0, 20.0)),
            Line::new("100", boxed(10.0, 10.0, 50.0, 20.0)),
        ];
        let frame = build(lines.clone()).unwrap();

        let placed = frame.dialogues.len()
            + frame.missions.len()
            + frame.choices.len()
            + frame.others.len();
        assert_eq!(placed, lines.len() - 1);
        for line in &lines {
            let hits = [
                Category::Dialogue,
                Category::Mission,
                Category::Choice,
                Category::Other,
            ]
            .iter()
            .filter(|category| frame.lines(**category).contains(line))
            .count();
            assert!(hits <= 1, "{} placed {} times", line.content, hits);
        }
    }

    #[test]
    fn test_console_frame_still_classifies_lines() {
        let frame = build(vec![
            Line::new("消息", [716.0, 450.0, 801.0, 447.0, 804.0, 497.0, 720.0, 499.0]),
            Line::new("来自:瑞吉娜", boxed(900.0, 600.0, 400.0, 50.0)),
        ])
        .unwrap();

        assert_eq!(frame.frame_type, FrameType::Console);
        assert_eq!(frame.other_texts(), vec!["消息", "来自:瑞吉娜"]);
    }

    #[test]
    fn test_malformed_line_fails_whole_frame() {
        let err = build(vec![
            Line::new("T-Bug:不错", boxed(1200.0, 1900.0, 800.0, 70.0)),
            Line::new("坏", [1.0, 2.0, 3.0, 4.0]),
        ])
        .unwrap_err();

        assert!(matches!(err, Error::MalformedBoundingBox { len: 4, .. }));
    }

    #[test]
    fn test_accessors_match_buckets() {
        let frame = build(vec![
            Line::new("T-Bug:不错", boxed(1200.0, 1900.0, 800.0, 70.0)),
            Line::new("前往来生酒吧", boxed(3044.0, 716.0, 600.0, 50.0)),
        ])
        .unwrap();

        assert_eq!(frame.frame_type(), FrameType::Normal);
        assert_eq!(frame.lines(Category::Dialogue)[0].content, "T-Bug:不错");
        assert_eq!(frame.lines(Category::Mission)[0].content, "前往来生酒吧");
        assert!(frame.lines(Category::Choice).is_empty());
    }

    #[test]
    fn test_frame_serializes_with_lowercase_tags() {
        let frame = build(vec![Line::new(
            "消息",
            [716.0, 450.0, 801.0, 447.0, 804.0, 497.0, 720.0, 499.0],
        )])
        .unwrap();
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["frame_type"], "console");
        assert_eq!(json["others"][0]["content"], "消息");
        assert_eq!(serde_json::to_value(Category::Dialogue).unwrap(), "dialogue");
    }

    struct CountingTransport {
        body: &'static str,
        calls: Cell<usize>,
    }

    impl Transport for CountingTransport {
        fn post(&self, _request: &AnalyzeRequest) -> Result<RawResponse> {
            self.calls.set(self.calls.get() + 1);
            Ok(RawResponse {
                status: 200,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    fn builder(body: &'static str) -> FrameBuilder<CountingTransport> {
        let transport = CountingTransport {
            body,
            calls: Cell::new(0),
        };
        let client = AiVisionClient::with_transport(transport, "https://example.test", "key");
        FrameBuilder::new(OcrResultCache::new(client), ScreenLayout::default())
    }

    #[test]
    fn test_parse_end_to_end() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("SHARE_20230617_0727300.jpeg");
        fs::write(&image, [0xFF, 0xD8]).unwrap();
        let builder = builder(
            r#"{"readResult":{"pages":[{"lines":[
                {"content":"是法兰克福的事吗?","boundingBox":[1500,1450,2100,1450,2100,1510,1500,1510]},
                {"content":"我没时间弄这个","boundingBox":[1500,1550,2000,1550,2000,1610,1500,1610]}
            ]}]}}"#,
        );

        let first = builder.parse(&image).unwrap();
        let second = builder.parse(&image).unwrap();

        assert_eq!(first.choice_texts(), vec!["是法兰克福的事吗?", "我没时间弄这个"]);
        assert_eq!(first, second);
        assert_eq!(builder.cache().client().transport().calls.get(), 1);
    }

    #[test]
    fn test_parse_propagates_fetch_error() {
        let dir = tempdir().unwrap();
        let err = builder("{}")
            .parse(&dir.path().join("missing.jpeg"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
