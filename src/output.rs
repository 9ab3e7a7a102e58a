use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutFrame {
    /// Regular "in-game" text line
    Line(String),
    /// Message from the engine itself, not world related
    System(String),
    /// Room name and description
    RoomView { name: String, description: String },
}

impl fmt::Display for OutFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutFrame::Line(s) | OutFrame::System(s) => f.write_str(s),
            OutFrame::RoomView { name, description } => write!(f, "{name}\n{description}"),
        }
    }
}

impl OutFrame {
    /// Terminal text for this frame. With `ansi`, engine messages are yellow and room
    /// names bold.
    pub fn render(&self, ansi: bool) -> String {
        match self {
            OutFrame::System(s) if ansi => format!("\x1b[33m{s}\x1b[0m"),
            OutFrame::RoomView { name, description } if ansi => format!("\x1b[1m{name}\x1b[0m\n{description}"),
            _ => self.to_string(),
        }
    }
}

/// Collects what one command wants to show. The binary prints it, tests read it.
#[derive(Debug, Default, Clone)]
pub struct Output {
    frames: Vec<OutFrame>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::Line(s.into()));
    }

    pub fn system(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::System(s.into()));
    }

    pub fn room_view(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.frames.push(OutFrame::RoomView {
            name: name.into(),
            description: description.into(),
        });
    }

    pub fn frames(&self) -> &[OutFrame] {
        &self.frames
    }

    /// Everything as one block of text.
    pub fn text(&self) -> String {
        self.frames.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_frames_and_room_view_spans_two_lines() {
        let mut out = Output::new();
        out.system("Game loaded: PROT01");
        out.room_view("ARMORY", "Racks of rusted weapons.");
        assert_eq!(out.text(), "Game loaded: PROT01\nARMORY\nRacks of rusted weapons.");
        assert_eq!(out.frames().len(), 2);
    }

    #[test]
    fn system_frames_render_apart_from_world_text() {
        let line = OutFrame::Line("lamp added to pack.".into());
        let system = OutFrame::System("Game save: save_files/PROT01.json".into());

        assert_eq!(line.render(true), "lamp added to pack.");
        assert_eq!(system.render(true), "\x1b[33mGame save: save_files/PROT01.json\x1b[0m");
        assert_eq!(system.render(false), "Game save: save_files/PROT01.json");

        let room = OutFrame::RoomView {
            name: "ARMORY".into(),
            description: "Racks of rusted weapons.".into(),
        };
        assert_eq!(room.render(true), "\x1b[1mARMORY\x1b[0m\nRacks of rusted weapons.");
        assert_eq!(room.render(false), "ARMORY\nRacks of rusted weapons.");
    }
}
