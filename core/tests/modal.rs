use portfolio_core::{
    is_cancel_key, ModalActions, ModalState, Project, ProjectLinks, SpotlightPosition, PROJECTS,
};

static GALLERY_AND_MORE: Project = Project {
    title: "Gallery",
    summary: "",
    description: "",
    tags: &["Design"],
    links: ProjectLinks {
        live: Some("https://live.example"),
        code: Some("https://code.example"),
        gallery: Some("https://gallery.example"),
    },
};

static LIVE_ONLY: Project = Project {
    title: "Live",
    summary: "",
    description: "",
    tags: &[],
    links: ProjectLinks {
        live: Some("https://live.example"),
        code: None,
        gallery: None,
    },
};

static NO_LINKS: Project = Project {
    title: "Bare",
    summary: "",
    description: "",
    tags: &[],
    links: ProjectLinks {
        live: None,
        code: None,
        gallery: None,
    },
};

#[test]
fn gallery_suppresses_code_and_live() {
    let mut modal = ModalState::new();
    modal.open(&GALLERY_AND_MORE);
    let actions = modal.actions();
    assert_eq!(actions, Some(ModalActions::GalleryOnly("https://gallery.example")));
    assert_eq!(
        actions.map(ModalActions::entries),
        Some(vec![("Gallery", "https://gallery.example")])
    );
}

#[test]
fn code_then_live_omitting_missing() {
    let both = PROJECTS
        .iter()
        .find(|project| project.title == "Tidepool")
        .expect("catalog project");
    assert_eq!(
        ModalActions::for_project(both).entries(),
        vec![
            ("Code", "https://github.com/alexmorgan/tidepool"),
            ("Live demo", "https://tidepool.example.com"),
        ]
    );
    assert_eq!(
        ModalActions::for_project(&LIVE_ONLY).entries(),
        vec![("Live demo", "https://live.example")]
    );
    assert!(ModalActions::for_project(&NO_LINKS).entries().is_empty());
}

#[test]
fn escape_closes_only_while_open() {
    let mut modal = ModalState::new();
    assert!(!modal.wants_key_listener());
    assert!(!modal.handle_key("Escape"));
    assert!(!modal.is_open());

    modal.open(&LIVE_ONLY);
    assert!(modal.wants_key_listener());
    assert!(!modal.handle_key("Enter"));
    assert!(modal.is_open());
    assert!(modal.handle_key("Escape"));
    assert!(!modal.is_open());
    assert_eq!(modal.actions(), None);
}

#[test]
fn opening_replaces_previous_project() {
    let mut modal = ModalState::new();
    modal.open(&LIVE_ONLY);
    modal.open(&NO_LINKS);
    assert_eq!(modal.project().map(|project| project.title), Some("Bare"));
    modal.close();
    assert_eq!(modal.project(), None);
}

#[test]
fn cancel_keys() {
    assert!(is_cancel_key("Escape"));
    assert!(is_cancel_key("Esc"));
    assert!(!is_cancel_key("escape"));
    assert!(!is_cancel_key("q"));
}

#[test]
fn spotlight_css_values() {
    let position = SpotlightPosition::new(12, 34);
    assert_eq!(position.css_values(), ("12px".to_string(), "34px".to_string()));
    let [(x_var, _), (y_var, y)] = position.css_properties();
    assert_eq!(x_var, "--mx");
    assert_eq!(y_var, "--my");
    assert_eq!(y, "34px");
}
