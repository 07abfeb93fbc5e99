use crate::drivers::LineSegment;
/// Backend that accepts immediate-mode line commands.
pub trait DrawingSurface {
    fn clear(&mut self);
    fn add_line(&mut self, segment: &LineSegment, thickness: f32);
}
/// Text fields and notifications the controller updates.
pub trait Readouts {
    fn set_live_text(&mut self, text: String);
    fn set_average_text(&mut self, text: String);
    fn set_run_label(&mut self, label: &str);
    fn notify(&mut self, notification: Notification);
}
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub value: f64,
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawnLine {
    pub segment: LineSegment,
    pub thickness: f32,
}
/// Keeps the current display list so a GUI can repaint it every frame.
#[derive(Clone, Debug, Default)]
pub struct RetainedSurface {
    lines: Vec<DrawnLine>,
}
impl RetainedSurface {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn lines(&self) -> &[DrawnLine] {
        &self.lines
    }
    pub fn segments(&self) -> Vec<LineSegment> {
        self.lines.iter().map(|l| l.segment).collect()
    }
}
impl DrawingSurface for RetainedSurface {
    fn clear(&mut self) {
        self.lines.clear();
    }
    fn add_line(&mut self, segment: &LineSegment, thickness: f32) {
        self.lines.push(DrawnLine {
            segment: *segment,
            thickness,
        });
    }
}
/// Plain in-memory readouts; the GUI shows whatever is stored here.
#[derive(Clone, Debug, Default)]
pub struct ReadoutPanel {
    pub live_text: String,
    pub average_text: String,
    pub run_label: String,
    pub notification: Option<Notification>,
}
impl ReadoutPanel {
    pub fn new() -> Self {
        Self::default()
    }
    /// Drops the pending notification, returning it if there was one.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.notification.take()
    }
}
impl Readouts for ReadoutPanel {
    fn set_live_text(&mut self, text: String) {
        self.live_text = text;
    }
    fn set_average_text(&mut self, text: String) {
        self.average_text = text;
    }
    fn set_run_label(&mut self, label: &str) {
        self.run_label = label.to_owned();
    }
    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }
}
