// Example: wiring WebScrollRestoration into a router's navigation hooks.
//
// Built for wasm32 this drives the real window; on native targets every call is a no-op.
use scroll_restoration::{ContainerOptions, ManagerOptions, NavigationType, ScrollBehavior};
use scroll_restoration_web::WebScrollRestoration;

struct Router {
    scroll: WebScrollRestoration,
    entries: Vec<String>,
    index: usize,
}

impl Router {
    fn new() -> Self {
        let scroll = WebScrollRestoration::with_options(
            ManagerOptions::default().with_fragment_behavior(ScrollBehavior::Smooth),
        );
        scroll.mount();
        Self {
            scroll,
            entries: Vec::new(),
            index: 0,
        }
    }

    fn push(&mut self) {
        self.entries.truncate(self.index + 1);
        self.entries.push(format!("entry-{}", self.entries.len()));
        self.index = self.entries.len() - 1;
        self.commit(NavigationType::Push);
    }

    fn back(&mut self) {
        if self.index == 0 {
            return;
        }
        self.index -= 1;
        self.commit(NavigationType::Pop);
    }

    fn commit(&mut self, kind: NavigationType) {
        self.scroll.before_navigate();

        // ...render the new route into the DOM here...

        let entry = self.entries[self.index].clone();
        let report = self.scroll.after_commit_location(entry, kind);
        println!("{kind:?}: {report:?}");
    }
}

fn main() {
    let mut router = Router::new();
    router.push();

    if let Some(document) = scroll_restoration_web::browser_window().and_then(|w| w.document()) {
        if let Some(panel) = document.get_element_by_id("chat") {
            router
                .scroll
                .attach_container("chat", panel, ContainerOptions::default());
        }
    }

    router.push();
    router.back();
}
