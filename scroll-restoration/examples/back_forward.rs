// Example: a simulated router driving window scroll restoration through push/back/forward.
use scroll_restoration::{
    ContainerId, Navigation, NavigationType, ScrollBehavior, ScrollEnvironment, ScrollManager,
    ScrollPosition, ScrollTarget,
};

#[derive(Default)]
struct Page {
    window: ScrollPosition,
}

impl ScrollTarget for Page {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        Some(self.window)
    }

    fn scroll_to(&mut self, position: ScrollPosition) -> bool {
        self.window = position;
        true
    }
}

impl ScrollEnvironment for Page {
    fn window(&mut self) -> Option<&mut dyn ScrollTarget> {
        Some(self)
    }

    fn container(&mut self, _id: &ContainerId) -> Option<&mut dyn ScrollTarget> {
        None
    }

    fn scroll_to_fragment(&mut self, fragment: &str, _behavior: ScrollBehavior) -> bool {
        // Pretend every page has an `#install` heading 1200px down.
        if fragment != "install" {
            return false;
        }
        self.window = ScrollPosition::new(0.0, 1_200.0);
        true
    }
}

fn main() {
    let mut manager = ScrollManager::default();
    let mut page = Page::default();

    let steps = [
        ("k1", NavigationType::Push, "/", 0.0),
        ("k2", NavigationType::Push, "/docs", 400.0),
        ("k3", NavigationType::Push, "/docs/hooks#install", 0.0),
        ("k2", NavigationType::Pop, "/docs", 0.0),
        ("k1", NavigationType::Pop, "/", 0.0),
        ("k2", NavigationType::Pop, "/docs", 0.0),
    ];

    for (entry, kind, href, scroll_after) in steps {
        // The router is about to swap views: record the outgoing offset.
        manager.depart(&mut page);

        // ...the new view is now in the DOM, before paint:
        let navigation = Navigation::from_href(entry, kind, href);
        let report = manager.arrive(&navigation, &mut page);
        println!(
            "{kind:?} {href:<22} -> {:?}, fragment {:?}, window at y={}",
            report.window, report.fragment, page.window.y
        );

        // The user scrolls around.
        if scroll_after > 0.0 {
            page.window = ScrollPosition::new(0.0, scroll_after);
            println!("  user scrolled to y={scroll_after}");
        }
    }

    println!("records: {}", manager.store().len());
}
