use crate::content::Project;

pub fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalActions {
    GalleryOnly(&'static str),
    CodeAndLive {
        code: Option<&'static str>,
        live: Option<&'static str>,
    },
}

impl ModalActions {
    pub fn for_project(project: &Project) -> Self {
        match project.links.gallery {
            Some(url) => ModalActions::GalleryOnly(url),
            None => ModalActions::CodeAndLive {
                code: project.links.code,
                live: project.links.live,
            },
        }
    }

    pub fn entries(self) -> Vec<(&'static str, &'static str)> {
        match self {
            ModalActions::GalleryOnly(url) => vec![("Gallery", url)],
            ModalActions::CodeAndLive { code, live } => code
                .map(|url| ("Code", url))
                .into_iter()
                .chain(live.map(|url| ("Live demo", url)))
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModalState {
    open: Option<&'static Project>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, project: &'static Project) {
        self.open = Some(project);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn project(&self) -> Option<&'static Project> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn wants_key_listener(&self) -> bool {
        self.is_open()
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() || !is_cancel_key(key) {
            return false;
        }
        self.close();
        true
    }

    pub fn actions(&self) -> Option<ModalActions> {
        self.open.map(ModalActions::for_project)
    }
}
