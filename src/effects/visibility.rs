#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
    FadingIn,
    FadingOut,
}

impl Visibility {
    pub fn settled(self) -> Self {
        match self {
            Visibility::FadingIn => Visibility::Shown,
            Visibility::FadingOut => Visibility::Hidden,
            other => other,
        }
    }

    pub fn fade_in(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Shown,
            _ => Visibility::FadingIn,
        }
    }

    pub fn fade_out(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Hidden,
            _ => Visibility::FadingOut,
        }
    }

    pub fn is_rendered(self) -> bool {
        self != Visibility::Hidden
    }

    pub fn style(self, fade_ms: u32) -> String {
        match self {
            Visibility::Hidden => "display: none;".to_string(),
            Visibility::Shown => "opacity: 1;".to_string(),
            Visibility::FadingIn => format!("opacity: 1; animation: fadeIn {}ms ease-in;", fade_ms),
            Visibility::FadingOut => format!("opacity: 0; transition: opacity {}ms ease-out;", fade_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_settle_into_their_end_state() {
        assert_eq!(Visibility::Shown.fade_out().settled(), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.fade_in().settled(), Visibility::Shown);
        assert_eq!(Visibility::Hidden.fade_out(), Visibility::Hidden);
        assert_eq!(Visibility::Shown.fade_in(), Visibility::Shown);
    }

    #[test]
    fn only_hidden_is_removed_from_layout() {
        assert_eq!(Visibility::Hidden.style(300), "display: none;");
        assert!(Visibility::FadingOut.is_rendered());
        assert!(Visibility::FadingIn.style(300).contains("300ms"));
    }
}
