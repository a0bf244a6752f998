use std::sync::Arc;

use crate::flow::login::LoginFlow;
use crate::flow::{self, login, RegistrationFlow};
use crate::service::AccountService;
use crate::session::SessionContext;
use crate::utils::mock;

/// Drives a registration flow to quiescence: applies the event, dispatches
/// whatever command falls out, feeds the settlement back in.
pub struct Sandbox {
    pub flow: RegistrationFlow,
    pub navigator: mock::Navigator,
}

impl Sandbox {
    pub fn new(flow: RegistrationFlow) -> Self {
        Self {
            flow,
            navigator: mock::Navigator::default(),
        }
    }

    pub async fn event(
        mut self,
        service: &Arc<dyn AccountService + Sync + Send>,
        event: flow::Event,
    ) -> Self {
        let mut next = self.flow.update(&mut self.navigator, event);
        while let Some(command) = next {
            let settlement = flow::perform(service.clone(), command).await;
            next = self.flow.update(&mut self.navigator, settlement);
        }
        self
    }
}

/// Same driver for the login flow, with the session the shell would own.
pub struct LoginSandbox {
    pub flow: LoginFlow,
    pub session: SessionContext,
    pub navigator: mock::Navigator,
}

impl LoginSandbox {
    pub fn new() -> Self {
        Self {
            flow: LoginFlow::new(),
            session: SessionContext::default(),
            navigator: mock::Navigator::default(),
        }
    }

    pub async fn event(
        mut self,
        service: &Arc<dyn AccountService + Sync + Send>,
        event: login::Event,
    ) -> Self {
        let mut next = self
            .flow
            .update(&mut self.session, &mut self.navigator, event);
        while let Some(command) = next {
            let settlement = login::perform(service.clone(), command).await;
            next = self
                .flow
                .update(&mut self.session, &mut self.navigator, settlement);
        }
        self
    }
}
