/// Responsive breakpoints for the results screen.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: platform + status only
    Compact,
    /// 60-99 cols: adds the link column
    Normal,
    /// 100+ cols: adds the notes column and full key hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    pub fn show_link(&self) -> bool {
        *self >= Breakpoint::Normal
    }

    pub fn show_notes(&self) -> bool {
        *self >= Breakpoint::Wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn columns_appear_as_width_grows() {
        assert!(!Breakpoint::Compact.show_link());
        assert!(Breakpoint::Normal.show_link() && !Breakpoint::Normal.show_notes());
        assert!(Breakpoint::Wide.show_notes());
    }
}
