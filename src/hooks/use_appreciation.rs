use dioxus::prelude::*;
use dioxus::core::Task;
use std::future::Future;

/// How long the thank-you overlay stays up after each activation
pub const APPRECIATION_DISPLAY_MS: u32 = 2000;

/// Visibility of the acknowledgment overlay
///
/// Every `show` bumps the generation; a hide only lands if it was scheduled
/// by the latest `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppreciationState {
    pub visible: bool,
    generation: u64,
}

impl AppreciationState {
    /// Show the overlay and return the token the matching hide must present
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.generation
    }

    /// Hide the overlay if no newer `show` happened since `token` was issued
    pub fn hide(&mut self, token: u64) -> bool {
        if token != self.generation {
            return false;
        }
        self.visible = false;
        true
    }
}

#[derive(Clone, Copy)]
pub struct UseAppreciation {
    pub state: Signal<AppreciationState>,
    pub trigger: EventHandler<()>,
}

/// One-shot timer used to hide the overlay
pub async fn display_timer(ms: u32) {
    #[cfg(target_family = "wasm")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(target_family = "wasm"))]
    {
        use std::time::Duration;
        tokio::time::sleep(Duration::from_millis(ms as u64)).await;
    }
}

/// Hook driving the "Appreciate" micro-interaction
///
/// Re-triggering restarts the visible window. The timer task belongs to the
/// calling component, so it is dropped on unmount instead of firing late.
pub fn use_appreciation() -> UseAppreciation {
    use_appreciation_with(display_timer)
}

/// Same as [`use_appreciation`] but waits on `timer` instead of the browser clock
pub fn use_appreciation_with<T, Fut>(timer: T) -> UseAppreciation
where
    T: Fn(u32) -> Fut + Copy + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let mut state = use_signal(AppreciationState::default);
    let mut hide_task = use_signal(|| None::<Task>);

    let trigger = use_callback(move |_: ()| {
        if let Some(task) = hide_task.peek().as_ref() {
            task.cancel();
        }

        let token = state.write().show();
        let expired = timer(APPRECIATION_DISPLAY_MS);

        let task = spawn(async move {
            expired.await;

            if !state.write().hide(token) {
                log::debug!("Skipped stale appreciation timer {}", token);
            }
        });
        hide_task.set(Some(task));
    });

    UseAppreciation { state, trigger }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::{NoOpMutations, VirtualDom};
    use std::cell::{Cell, RefCell};
    use std::time::Duration;
    use tokio::sync::oneshot;

    thread_local! {
        static HANDLE: Cell<Option<UseAppreciation>> = const { Cell::new(None) };
        static TIMERS: RefCell<Vec<(u32, oneshot::Sender<()>)>> = const { RefCell::new(Vec::new()) };
    }

    /// Timer that only fires when the test sends on its channel
    fn manual_timer(ms: u32) -> impl Future<Output = ()> {
        let (tx, rx) = oneshot::channel();
        TIMERS.with(|t| t.borrow_mut().push((ms, tx)));
        async move {
            let _ = rx.await;
        }
    }

    fn take_timer(index: usize) -> (u32, oneshot::Sender<()>) {
        TIMERS.with(|t| t.borrow_mut().remove(index))
    }

    fn app() -> Element {
        let appreciation = use_appreciation_with(manual_timer);
        HANDLE.with(|h| h.set(Some(appreciation)));
        rsx! {}
    }

    fn handle() -> UseAppreciation {
        HANDLE.with(|h| h.get()).expect("component rendered")
    }

    fn visible(dom: &VirtualDom) -> bool {
        dom.in_runtime(|| handle().state.peek().visible)
    }

    async fn run_until_idle(dom: &mut VirtualDom) {
        for _ in 0..5 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(50)) => {}
            };
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[test]
    fn test_show_then_hide() {
        let mut state = AppreciationState::default();
        assert!(!state.visible);

        let token = state.show();
        assert!(state.visible);
        assert!(state.hide(token));
        assert!(!state.visible);
    }

    #[test]
    fn test_stale_token_does_not_hide() {
        let mut state = AppreciationState::default();
        let first = state.show();
        let second = state.show();

        assert!(!state.hide(first));
        assert!(state.visible);

        assert!(state.hide(second));
        assert!(!state.visible);
    }

    #[tokio::test]
    async fn test_trigger_shows_until_timer_fires() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        run_until_idle(&mut dom).await;
        assert!(!visible(&dom));

        handle().trigger.call(());
        assert!(visible(&dom));
        run_until_idle(&mut dom).await;

        // Still up while the timer is pending
        assert!(visible(&dom));

        let (ms, fire) = take_timer(0);
        assert_eq!(ms, 2000);
        assert!(fire.send(()).is_ok());
        run_until_idle(&mut dom).await;

        assert!(!visible(&dom));
    }

    #[tokio::test]
    async fn test_retrigger_cancels_pending_timer() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        run_until_idle(&mut dom).await;

        handle().trigger.call(());
        run_until_idle(&mut dom).await;
        handle().trigger.call(());
        run_until_idle(&mut dom).await;

        let (_, first) = take_timer(0);
        let (ms, second) = take_timer(0);
        assert_eq!(ms, 2000);

        // The first hide task was dropped along with its timer
        assert!(first.send(()).is_err());
        run_until_idle(&mut dom).await;
        assert!(visible(&dom));

        assert!(second.send(()).is_ok());
        run_until_idle(&mut dom).await;
        assert!(!visible(&dom));
    }
}
