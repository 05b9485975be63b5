use crate::errors::{PageError, PageResult};
use crate::page::{HostPage, PanelHandle};
use crate::presentation::{ChainPresentationProfile, FailureStage};
use crate::types::DecodedEvent;
use tracing::{debug, info};

/// Panel lifecycle. `Populated` and `Errored` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    NotStarted,
    Loading,
    Populated,
    Errored,
}

impl PanelState {
    pub fn name(&self) -> &'static str {
        match self {
            PanelState::NotStarted => "NotStarted",
            PanelState::Loading => "Loading",
            PanelState::Populated => "Populated",
            PanelState::Errored => "Errored",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PanelState::Populated | PanelState::Errored)
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The injected tab header and content pane for one page load
pub struct Panel {
    profile: ChainPresentationProfile,
    state: PanelState,
    handle: Option<PanelHandle>,
}

impl Panel {
    pub fn new(profile: ChainPresentationProfile) -> Self {
        Self {
            profile,
            state: PanelState::NotStarted,
            handle: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn profile(&self) -> &ChainPresentationProfile {
        &self.profile
    }

    pub fn handle(&self) -> Option<&PanelHandle> {
        self.handle.as_ref()
    }

    fn transition(&mut self, from: PanelState, to: PanelState) -> PageResult<()> {
        if self.state != from {
            return Err(PageError::InvalidTransition {
                from: self.state.name(),
                to: to.name(),
            });
        }
        debug!("Panel {} -> {}", self.state, to);
        self.state = to;
        Ok(())
    }

    /// Inject the tab header and a loading pane. Both containers must exist
    /// before anything is written, so a missing one leaves the page untouched.
    pub fn open<P: HostPage + ?Sized>(&mut self, page: &mut P) -> PageResult<()> {
        if self.state != PanelState::NotStarted {
            return Err(PageError::InvalidTransition {
                from: self.state.name(),
                to: PanelState::Loading.name(),
            });
        }
        for selector in [self.profile.tab_container, self.profile.panel_container] {
            if !page.has_container(selector) {
                return Err(PageError::ContainerMissing {
                    selector: selector.to_string(),
                });
            }
        }

        let widget = self.profile.widget;
        page.insert_tab(
            self.profile.tab_container,
            self.profile.tab_placement,
            widget.tab_header(),
        )?;
        let handle = page.append_panel(self.profile.panel_container, widget.loading_panel())?;
        self.handle = Some(handle);

        self.transition(PanelState::NotStarted, PanelState::Loading)
    }

    pub fn show_error<P: HostPage + ?Sized>(
        &mut self,
        page: &mut P,
        stage: FailureStage,
    ) -> PageResult<()> {
        self.transition(PanelState::Loading, PanelState::Errored)?;
        info!("Decoded events panel failed at {} stage", stage);
        let body = self.profile.widget.error_body(stage);
        self.write(page, body)
    }

    pub fn show_events<P: HostPage + ?Sized>(
        &mut self,
        page: &mut P,
        events: &[DecodedEvent],
    ) -> PageResult<()> {
        self.transition(PanelState::Loading, PanelState::Populated)?;
        info!("Rendering {} decoded events", events.len());
        let body = self.profile.render_events(events);
        self.write(page, body)
    }

    fn write<P: HostPage + ?Sized>(&self, page: &mut P, body: String) -> PageResult<()> {
        let handle = self.handle.as_ref().ok_or_else(|| PageError::UnknownPanel {
            selector: self.profile.panel_container.to_string(),
        })?;
        page.set_panel_content(handle, body)
    }
}
