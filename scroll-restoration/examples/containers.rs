// Example: independent restoration of inner scroll regions (sidebar + chat panel).
use scroll_restoration::{
    ContainerId, ContainerOptions, ContainerScope, Navigation, NavigationType, ScrollBehavior,
    ScrollEnvironment, ScrollManager, ScrollPosition, ScrollTarget,
};

#[derive(Debug, Default)]
struct Region(ScrollPosition);

impl ScrollTarget for Region {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        Some(self.0)
    }

    fn scroll_to(&mut self, position: ScrollPosition) -> bool {
        self.0 = position;
        true
    }
}

#[derive(Default)]
struct Layout {
    window: Region,
    sidebar: Region,
    chat: Option<Region>,
}

impl ScrollEnvironment for Layout {
    fn window(&mut self) -> Option<&mut dyn ScrollTarget> {
        Some(&mut self.window)
    }

    fn container(&mut self, id: &ContainerId) -> Option<&mut dyn ScrollTarget> {
        match id.as_str() {
            "sidebar" => Some(&mut self.sidebar),
            "chat" => self.chat.as_mut().map(|c| c as &mut dyn ScrollTarget),
            _ => None,
        }
    }

    fn scroll_to_fragment(&mut self, _fragment: &str, _behavior: ScrollBehavior) -> bool {
        false
    }
}

fn main() {
    let mut manager = ScrollManager::default();
    let mut layout = Layout::default();

    // The sidebar keeps one offset for the whole session; the chat panel is per entry.
    manager.register_container(
        "sidebar",
        ContainerOptions::default()
            .with_scope(ContainerScope::Shared)
            .with_force_top_on_fresh(false),
    );

    manager.navigate(&Navigation::new("k1", NavigationType::Push), &mut layout);
    layout.chat = Some(Region::default());
    manager.mount_container("chat", ContainerOptions::default(), &mut layout);

    layout.sidebar.0 = ScrollPosition::new(0.0, 220.0);
    if let Some(chat) = layout.chat.as_mut() {
        chat.0 = ScrollPosition::new(0.0, 3_400.0);
    }

    // Leaving k1: the chat panel unmounts with its page.
    manager.unmount_container(&ContainerId::from("chat"), &mut layout);
    layout.chat = None;
    manager.navigate(&Navigation::new("k2", NavigationType::Push), &mut layout);
    println!("k2: sidebar y={} (kept)", layout.sidebar.0.y);

    // Back to k1: the page renders its chat panel again after the commit.
    manager.navigate(&Navigation::new("k1", NavigationType::Pop), &mut layout);
    layout.chat = Some(Region::default());
    let restored = manager.mount_container("chat", ContainerOptions::default(), &mut layout);
    println!("k1: chat {restored:?}, sidebar y={}", layout.sidebar.0.y);
}
