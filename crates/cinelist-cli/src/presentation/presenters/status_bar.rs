use crate::presentation::view_models::{
    KeyHint, PageViewModel, ScreenViewModel, StatusBadge, StatusBarViewModel, StatusLevel,
};

/// Status line for the current page
///
/// A pending notice (e.g. "movie added") replaces the page's own message.
pub fn present_status_bar(
    screen: &ScreenViewModel,
    notice: Option<&StatusBadge>,
    dialog_open: bool,
) -> StatusBarViewModel {
    let (message, level) = match &screen.page {
        PageViewModel::Home(home) if home.no_results => (
            "No movies found matching your criteria".to_string(),
            StatusLevel::Warning,
        ),
        PageViewModel::Home(home) => (
            format!("Showing {} of {} movies", home.showing, home.total),
            StatusLevel::Info,
        ),
        PageViewModel::Detail(detail) => match (&detail.movie, detail.movie_id) {
            (Some(movie), _) => (format!("Movie #{}", movie.id), StatusLevel::Info),
            (None, Some(id)) => (format!("Movie #{} not found", id), StatusLevel::Error),
            (None, None) => ("Movie not found".to_string(), StatusLevel::Error),
        },
        PageViewModel::Blank => (String::new(), StatusLevel::Info),
    };

    let (message, level) = match notice {
        Some(badge) => (badge.label.clone(), badge.level),
        None => (message, level),
    };

    StatusBarViewModel {
        message,
        level,
        hints: hints(&screen.page, dialog_open),
    }
}

fn hints(page: &PageViewModel, dialog_open: bool) -> Vec<KeyHint> {
    if dialog_open {
        return vec![
            KeyHint::new("Tab", "next field"),
            KeyHint::new("←/→", "rating"),
            KeyHint::new("Enter", "add"),
            KeyHint::new("Esc", "cancel"),
        ];
    }

    match page {
        PageViewModel::Home(_) => vec![
            KeyHint::new("/", "search"),
            KeyHint::new("r", "rating"),
            KeyHint::new("c", "clear"),
            KeyHint::new("a", "add"),
            KeyHint::new("Enter", "open"),
            KeyHint::new("q", "quit"),
        ],
        PageViewModel::Detail(_) => vec![
            KeyHint::new("Esc", "back"),
            KeyHint::new("j/k", "scroll"),
            KeyHint::new("q", "quit"),
        ],
        PageViewModel::Blank => Vec::new(),
    }
}
