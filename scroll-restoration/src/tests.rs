use crate::*;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as u32
    }

    fn gen_position(&mut self) -> ScrollPosition {
        ScrollPosition::new(
            self.gen_range_u32(0, 800) as f64,
            self.gen_range_u32(0, 20_000) as f64,
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct FakeTarget {
    position: ScrollPosition,
    writes: usize,
}

impl FakeTarget {
    fn at(x: f64, y: f64) -> Self {
        Self {
            position: ScrollPosition::new(x, y),
            writes: 0,
        }
    }
}

impl ScrollTarget for FakeTarget {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        Some(self.position)
    }

    fn scroll_to(&mut self, position: ScrollPosition) -> bool {
        self.position = position;
        self.writes += 1;
        true
    }
}

/// A fake document: a window, named scroll containers and fragment anchors.
#[derive(Debug, Default)]
struct FakeEnv {
    window: Option<FakeTarget>,
    containers: Vec<(ContainerId, FakeTarget)>,
    anchors: Vec<(String, ScrollPosition)>,
    fragment_behavior: Option<ScrollBehavior>,
}

impl FakeEnv {
    fn browser() -> Self {
        Self {
            window: Some(FakeTarget::default()),
            ..Self::default()
        }
    }

    fn with_container(mut self, id: &str) -> Self {
        self.containers
            .push((ContainerId::from(id), FakeTarget::default()));
        self
    }

    fn with_anchor(mut self, fragment: &str, y: f64) -> Self {
        self.anchors
            .push((fragment.to_string(), ScrollPosition::new(0.0, y)));
        self
    }

    fn scroll_window(&mut self, x: f64, y: f64) {
        self.window
            .as_mut()
            .expect("window attached")
            .position = ScrollPosition::new(x, y);
    }

    fn window_position(&self) -> ScrollPosition {
        self.window.expect("window attached").position
    }

    fn container_mut(&mut self, id: &str) -> &mut FakeTarget {
        self.containers
            .iter_mut()
            .find(|(cid, _)| cid.as_str() == id)
            .map(|(_, t)| t)
            .expect("container attached")
    }

    fn detach_container(&mut self, id: &str) {
        self.containers.retain(|(cid, _)| cid.as_str() != id);
    }
}

impl ScrollEnvironment for FakeEnv {
    fn window(&mut self) -> Option<&mut dyn ScrollTarget> {
        self.window.as_mut().map(|w| w as &mut dyn ScrollTarget)
    }

    fn container(&mut self, id: &ContainerId) -> Option<&mut dyn ScrollTarget> {
        self.containers
            .iter_mut()
            .find(|(cid, _)| cid == id)
            .map(|(_, t)| t as &mut dyn ScrollTarget)
    }

    fn scroll_to_fragment(&mut self, fragment: &str, behavior: ScrollBehavior) -> bool {
        let Some(&(_, position)) = self.anchors.iter().find(|(name, _)| name == fragment) else {
            return false;
        };
        self.fragment_behavior = Some(behavior);
        match self.window.as_mut() {
            Some(window) => window.scroll_to(position),
            None => false,
        }
    }
}

fn push(entry: &str) -> Navigation {
    Navigation::new(entry, NavigationType::Push)
}

fn pop(entry: &str) -> Navigation {
    Navigation::new(entry, NavigationType::Pop)
}

fn replace(entry: &str) -> Navigation {
    Navigation::new(entry, NavigationType::Replace)
}

fn window_key(entry: &str) -> StoreKey {
    StoreKey::window(RouteKey::Entry(EntryKey::from(entry)))
}

#[test]
fn classifier_maps_every_navigation_type() {
    assert_eq!(
        NavigationOutcome::classify(NavigationType::Push),
        NavigationOutcome::Fresh
    );
    assert_eq!(
        NavigationOutcome::classify(NavigationType::Replace),
        NavigationOutcome::Replaced
    );
    assert_eq!(
        NavigationOutcome::from(NavigationType::Pop),
        NavigationOutcome::Traversed
    );

    assert!(!NavigationOutcome::Fresh.restores_saved());
    assert!(!NavigationOutcome::Replaced.restores_saved());
    assert!(NavigationOutcome::Traversed.restores_saved());
}

#[test]
fn navigation_from_href_splits_path_and_fragment() {
    let nav = Navigation::from_href("k1", NavigationType::Push, "/docs/hooks?tab=api#use-effect");
    assert_eq!(nav.path, "/docs/hooks");
    assert_eq!(nav.fragment.as_deref(), Some("use-effect"));

    let nav = Navigation::from_href("k2", NavigationType::Push, "https://example.com/a/b#");
    assert_eq!(nav.path, "/a/b");
    assert_eq!(nav.fragment, None);

    let nav = Navigation::from_href("k3", NavigationType::Push, "https://example.com");
    assert_eq!(nav.path, "/");

    let nav = Navigation::from_href("k4", NavigationType::Pop, "#intro");
    assert_eq!(nav.path, "/");
    assert_eq!(nav.fragment.as_deref(), Some("intro"));

    let nav = Navigation::from_href("k6", NavigationType::Push, "//cdn.example.com/x?v=2#top");
    assert_eq!(nav.path, "/x");
    assert_eq!(nav.fragment.as_deref(), Some("top"));

    let nav = Navigation::from_href("k7", NavigationType::Push, "//cdn.example.com");
    assert_eq!(nav.path, "/");

    let nav = push("k5").with_fragment(Some("#already-hashed"));
    assert_eq!(nav.fragment.as_deref(), Some("already-hashed"));
}

#[test]
fn store_overwrites_and_reports_absent() {
    let mut store = PositionStore::new();
    let key = window_key("a");
    assert_eq!(store.read(&key), None);

    store.save(key.clone(), ScrollPosition::new(0.0, 100.0));
    store.save(key.clone(), ScrollPosition::new(0.0, 250.0));
    assert_eq!(store.read(&key), Some(ScrollPosition::new(0.0, 250.0)));
    assert_eq!(store.len(), 1);

    assert_eq!(store.remove(&key), Some(ScrollPosition::new(0.0, 250.0)));
    assert!(store.is_empty());
}

#[test]
fn store_save_is_idempotent() {
    let mut store = PositionStore::new();
    let key = window_key("a");
    let pos = ScrollPosition::new(12.5, 400.0);

    store.save(key.clone(), pos);
    let first = store.read(&key);
    store.save(key.clone(), pos);
    assert_eq!(store.read(&key), first);
    assert_eq!(store.len(), 1);
}

#[test]
fn store_sanitizes_non_finite_positions() {
    let mut store = PositionStore::new();
    let key = window_key("a");
    store.save(key.clone(), ScrollPosition::new(f64::NAN, 30.0));
    assert_eq!(store.read(&key), Some(ScrollPosition::new(0.0, 30.0)));

    store.save(key.clone(), ScrollPosition::new(5.0, f64::INFINITY));
    assert_eq!(store.read(&key), Some(ScrollPosition::new(5.0, 0.0)));
}

#[test]
fn store_capacity_evicts_least_recently_saved() {
    let mut store = PositionStore::with_capacity(NonZeroUsize::new(2).unwrap());
    store.save(window_key("a"), ScrollPosition::new(0.0, 1.0));
    store.save(window_key("b"), ScrollPosition::new(0.0, 2.0));
    // Rewriting `a` makes `b` the oldest.
    store.save(window_key("a"), ScrollPosition::new(0.0, 3.0));
    store.save(window_key("c"), ScrollPosition::new(0.0, 4.0));

    assert_eq!(store.len(), 2);
    assert!(!store.contains(&window_key("b")));
    assert_eq!(store.read(&window_key("a")), Some(ScrollPosition::new(0.0, 3.0)));
    assert_eq!(store.read(&window_key("c")), Some(ScrollPosition::new(0.0, 4.0)));
}

#[test]
fn push_lands_at_top() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();

    m.navigate(&push("a"), &mut env);
    env.scroll_window(0.0, 900.0);

    let report = m.navigate(&push("b"), &mut env);
    assert_eq!(report.outcome, NavigationOutcome::Fresh);
    assert_eq!(report.window, Restoration::Reset);
    assert_eq!(env.window_position(), ScrollPosition::TOP);
}

#[test]
fn back_restores_the_offset_left_behind() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();

    m.navigate(&push("a"), &mut env);
    m.navigate(&push("b"), &mut env);
    env.scroll_window(0.0, 400.0);

    m.navigate(&push("c"), &mut env);
    assert_eq!(env.window_position(), ScrollPosition::TOP);

    let report = m.navigate(&pop("b"), &mut env);
    assert_eq!(report.outcome, NavigationOutcome::Traversed);
    assert_eq!(
        report.window,
        Restoration::Restored(ScrollPosition::new(0.0, 400.0))
    );
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 400.0));

    // Forward again: `c` was left at top.
    env.scroll_window(0.0, 10.0);
    m.navigate(&pop("c"), &mut env);
    assert_eq!(env.window_position(), ScrollPosition::TOP);
}

#[test]
fn replace_resets_like_push() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();

    m.navigate(&push("a"), &mut env);
    env.scroll_window(0.0, 700.0);

    let report = m.navigate(&replace("a2"), &mut env);
    assert_eq!(report.outcome, NavigationOutcome::Replaced);
    assert_eq!(report.window, Restoration::Reset);
    assert_eq!(env.window_position(), ScrollPosition::TOP);
}

#[test]
fn deep_link_with_fragment_scrolls_to_target() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser().with_anchor("use-effect", 1_250.0);

    let nav = Navigation::from_href("k1", NavigationType::Push, "/docs/hooks#use-effect");
    let report = m.navigate(&nav, &mut env);

    assert_eq!(report.window, Restoration::Reset);
    assert_eq!(report.fragment, FragmentResolution::Scrolled);
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 1_250.0));
    assert_eq!(env.fragment_behavior, Some(ScrollBehavior::Instant));
}

#[test]
fn traversal_without_record_falls_back_to_top() {
    // A reload loses the in-memory store while the router still reports a pop.
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();
    env.scroll_window(0.0, 3_000.0);

    let report = m.arrive(&pop("restored-entry"), &mut env);
    assert_eq!(report.window, Restoration::Reset);
    assert_eq!(env.window_position(), ScrollPosition::TOP);
}

#[test]
fn fragment_overrides_a_restored_offset() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser().with_anchor("faq", 50.0);

    m.navigate(&push("a"), &mut env);
    env.scroll_window(0.0, 600.0);
    m.navigate(&push("b"), &mut env);

    let report = m.navigate(&pop("a").with_fragment(Some("faq")), &mut env);
    assert_eq!(
        report.window,
        Restoration::Restored(ScrollPosition::new(0.0, 600.0))
    );
    assert_eq!(report.fragment, FragmentResolution::Scrolled);
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 50.0));
}

#[test]
fn dangling_fragment_keeps_the_restored_offset() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();

    m.navigate(&push("a"), &mut env);
    env.scroll_window(0.0, 600.0);
    m.navigate(&push("b"), &mut env);

    let report = m.navigate(&pop("a").with_fragment(Some("missing")), &mut env);
    assert_eq!(report.fragment, FragmentResolution::Dangling);
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 600.0));
    assert_eq!(env.fragment_behavior, None);
}

#[test]
fn smooth_fragment_behavior_is_forwarded() {
    let mut m = ScrollManager::new(
        ManagerOptions::default().with_fragment_behavior(ScrollBehavior::Smooth),
    );
    let mut env = FakeEnv::browser().with_anchor("install", 300.0);

    m.navigate(&push("a").with_fragment(Some("install")), &mut env);
    assert_eq!(env.fragment_behavior, Some(ScrollBehavior::Smooth));
}

#[test]
fn fresh_navigations_always_land_at_top() {
    let mut rng = Lcg::new(7);
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();

    for i in 0..200 {
        let pos = rng.gen_position();
        env.scroll_window(pos.x, pos.y);
        let nav = if i % 3 == 0 {
            replace(&std::format!("r{i}"))
        } else {
            push(&std::format!("p{i}"))
        };
        m.navigate(&nav, &mut env);
        assert_eq!(env.window_position(), ScrollPosition::TOP, "step {i}");
    }
}

#[test]
fn randomized_history_matches_model() {
    for seed in [1u64, 2, 3, 42, 1337] {
        let mut rng = Lcg::new(seed);
        let mut m = ScrollManager::default();
        let mut env = FakeEnv::browser();

        let mut next_key = 0usize;
        let mut fresh_key = || {
            next_key += 1;
            std::format!("k{next_key}")
        };

        let mut stack: Vec<String> = Vec::new();
        let mut index = 0usize;
        let mut saved: HashMap<String, ScrollPosition> = HashMap::new();

        let first = fresh_key();
        m.navigate(&push(&first), &mut env);
        stack.push(first);

        for step in 0..500 {
            let op = rng.gen_range_u32(0, 5);
            let (nav, traversal) = match op {
                0 => {
                    let pos = rng.gen_position();
                    env.scroll_window(pos.x, pos.y);
                    continue;
                }
                1 => {
                    let key = fresh_key();
                    stack.truncate(index + 1);
                    stack.push(key.clone());
                    index += 1;
                    (push(&key), false)
                }
                2 => {
                    let key = fresh_key();
                    stack[index] = key.clone();
                    (replace(&key), false)
                }
                3 if index > 0 => {
                    index -= 1;
                    (pop(&stack[index]), true)
                }
                4 if index + 1 < stack.len() => {
                    index += 1;
                    (pop(&stack[index]), true)
                }
                _ => continue,
            };

            let leaving = m
                .window()
                .current_key()
                .and_then(|key| match key {
                    StoreKey::Window(RouteKey::Entry(entry)) => Some(entry.as_str().to_string()),
                    _ => None,
                })
                .expect("an entry is on screen");
            saved.insert(leaving, env.window_position());

            let expected = if traversal {
                saved
                    .get(nav.entry.as_str())
                    .copied()
                    .unwrap_or(ScrollPosition::TOP)
            } else {
                ScrollPosition::TOP
            };

            let report = m.navigate(&nav, &mut env);
            assert_eq!(
                env.window_position(),
                expected,
                "seed {seed} step {step} nav {nav:?}"
            );
            assert_eq!(report.window.applied(), Some(expected));
        }
    }
}

#[test]
fn containers_restore_independently() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser()
        .with_container("sidebar")
        .with_container("chat");
    assert!(m.register_container("sidebar", ContainerOptions::default()));
    assert!(m.register_container("chat", ContainerOptions::default()));

    m.navigate(&push("a"), &mut env);
    env.scroll_window(0.0, 100.0);
    env.container_mut("sidebar").position = ScrollPosition::new(0.0, 40.0);
    env.container_mut("chat").position = ScrollPosition::new(0.0, 900.0);

    let report = m.navigate(&push("b"), &mut env);
    assert_eq!(
        report.containers,
        alloc::vec![
            (ContainerId::from("sidebar"), Restoration::Reset),
            (ContainerId::from("chat"), Restoration::Reset),
        ]
    );
    env.container_mut("chat").position = ScrollPosition::new(0.0, 15.0);

    m.navigate(&pop("a"), &mut env);
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 100.0));
    assert_eq!(
        env.container_mut("sidebar").position,
        ScrollPosition::new(0.0, 40.0)
    );
    assert_eq!(
        env.container_mut("chat").position,
        ScrollPosition::new(0.0, 900.0)
    );

    m.navigate(&pop("b"), &mut env);
    assert_eq!(
        env.container_mut("chat").position,
        ScrollPosition::new(0.0, 15.0)
    );
    assert_eq!(env.container_mut("sidebar").position, ScrollPosition::TOP);
}

#[test]
fn container_keys_never_alias_window_keys() {
    let mut store = PositionStore::new();
    let entry = EntryKey::from("a");
    let window = StoreKey::window(RouteKey::Entry(entry.clone()));
    let container = StoreKey::container(ContainerId::from("a"), None);
    let scoped = StoreKey::container(ContainerId::from("a"), Some(RouteKey::Entry(entry)));

    store.save(window.clone(), ScrollPosition::new(0.0, 1.0));
    store.save(container.clone(), ScrollPosition::new(0.0, 2.0));
    store.save(scoped.clone(), ScrollPosition::new(0.0, 3.0));

    assert_eq!(store.len(), 3);
    assert_eq!(store.read(&window), Some(ScrollPosition::new(0.0, 1.0)));
    assert_eq!(store.read(&container), Some(ScrollPosition::new(0.0, 2.0)));
    assert_eq!(store.read(&scoped), Some(ScrollPosition::new(0.0, 3.0)));

    assert_eq!(window.to_string(), "window@entry:a");
    assert_eq!(container.to_string(), "container:a");
    assert_eq!(scoped.to_string(), "container:a@entry:a");
}

#[test]
fn shared_container_scope_restores_across_entries() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser().with_container("nav");
    m.register_container(
        "nav",
        ContainerOptions::default()
            .with_scope(ContainerScope::Shared)
            .with_force_top_on_fresh(false),
    );

    m.navigate(&push("a"), &mut env);
    env.container_mut("nav").position = ScrollPosition::new(0.0, 320.0);

    let report = m.navigate(&push("b"), &mut env);
    assert_eq!(report.containers[0].1, Restoration::Preserved);
    assert_eq!(
        env.container_mut("nav").position,
        ScrollPosition::new(0.0, 320.0)
    );

    // Any traversal reads the single shared record.
    env.container_mut("nav").position = ScrollPosition::new(0.0, 500.0);
    m.navigate(&pop("a"), &mut env);
    assert_eq!(
        env.container_mut("nav").position,
        ScrollPosition::new(0.0, 500.0)
    );
    assert_eq!(
        m.store()
            .read(&StoreKey::container(ContainerId::from("nav"), None)),
        Some(ScrollPosition::new(0.0, 500.0))
    );
}

#[test]
fn reset_opt_outs_preserve_offset() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();
    m.navigate(&push("a"), &mut env);
    env.scroll_window(0.0, 250.0);

    let report = m.navigate(&push("b").with_prevent_scroll_reset(true), &mut env);
    assert_eq!(report.window, Restoration::Preserved);
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 250.0));

    let mut m = ScrollManager::new(ManagerOptions::default().with_force_top_on_fresh(false));
    let mut env = FakeEnv::browser();
    env.scroll_window(0.0, 75.0);
    assert_eq!(m.navigate(&push("a"), &mut env).window, Restoration::Preserved);
    // With the reset disabled, a traversal without a record also leaves the offset alone.
    assert_eq!(
        m.navigate(&pop("unknown"), &mut env).window,
        Restoration::Preserved
    );
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 75.0));
}

#[test]
fn prevent_scroll_reset_does_not_block_traversal_fallback() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();
    env.scroll_window(0.0, 75.0);

    let report = m.arrive(&pop("x").with_prevent_scroll_reset(true), &mut env);
    assert_eq!(report.window, Restoration::Reset);
    assert_eq!(env.window_position(), ScrollPosition::TOP);
}

#[test]
fn headless_environment_is_a_no_op() {
    let mut m = ScrollManager::default();
    m.register_container("panel", ContainerOptions::default());

    let report = m.navigate(&push("a").with_fragment(Some("x")), &mut Headless);
    assert_eq!(report.window, Restoration::Unavailable);
    assert_eq!(
        report.containers,
        alloc::vec![(ContainerId::from("panel"), Restoration::Unavailable)]
    );
    assert_eq!(report.fragment, FragmentResolution::Dangling);

    m.navigate(&push("b"), &mut Headless);
    m.navigate(&pop("a"), &mut Headless);
    assert!(m.store().is_empty());
    assert_eq!(m.current_navigation(), Some(&pop("a")));
}

#[test]
fn container_survives_unmount_remount_cycles() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser().with_container("chat");
    let chat = ContainerId::from("chat");

    assert_eq!(
        m.mount_container("chat", ContainerOptions::default(), &mut env),
        None
    );
    m.navigate(&push("a"), &mut env);
    env.container_mut("chat").position = ScrollPosition::new(0.0, 120.0);

    assert_eq!(
        m.unmount_container(&chat, &mut env),
        Some(ScrollPosition::new(0.0, 120.0))
    );
    assert!(!m.is_container_registered(&chat));
    env.detach_container("chat");

    m.navigate(&push("b"), &mut env);
    m.navigate(&pop("a"), &mut env);

    // The page for `a` renders its chat panel again after the commit.
    env = env.with_container("chat");
    let restored = m.mount_container("chat", ContainerOptions::default(), &mut env);
    assert_eq!(
        restored,
        Some(Restoration::Restored(ScrollPosition::new(0.0, 120.0)))
    );
    assert_eq!(
        env.container_mut("chat").position,
        ScrollPosition::new(0.0, 120.0)
    );
}

#[test]
fn detached_container_ref_is_skipped() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();
    m.register_container("panel", ContainerOptions::default());

    let report = m.navigate(&push("a"), &mut env);
    assert_eq!(report.containers[0].1, Restoration::Unavailable);
    assert_eq!(report.window, Restoration::Reset);
}

#[test]
fn duplicate_container_registration_is_rejected() {
    let mut m = ScrollManager::default();
    assert!(m.register_container("panel", ContainerOptions::default()));
    assert!(!m.register_container(
        "panel",
        ContainerOptions::default().with_scope(ContainerScope::Shared)
    ));
    assert_eq!(m.containers().count(), 1);
    assert_eq!(
        m.containers().next().map(|c| c.options().scope),
        Some(ContainerScope::PerEntry)
    );

    assert!(m.unregister_container(&ContainerId::from("panel")));
    assert!(!m.unregister_container(&ContainerId::from("panel")));
}

#[test]
fn remounting_a_mounted_container_keeps_its_offset() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser().with_container("chat");
    m.register_container("chat", ContainerOptions::default());

    m.navigate(&push("a"), &mut env);
    env.container_mut("chat").position = ScrollPosition::new(0.0, 50.0);
    let writes = env.container_mut("chat").writes;

    let restored = m.mount_container(
        "chat",
        ContainerOptions::default().with_scope(ContainerScope::Shared),
        &mut env,
    );
    assert_eq!(restored, None);
    assert_eq!(
        env.container_mut("chat").position,
        ScrollPosition::new(0.0, 50.0)
    );
    assert_eq!(env.container_mut("chat").writes, writes);
    assert_eq!(
        m.containers().next().map(|c| c.options().scope),
        Some(ContainerScope::PerEntry)
    );
}

#[test]
fn path_key_strategy_shares_records_between_entries() {
    let mut m = ScrollManager::new(ManagerOptions::default().with_key_strategy(KeyStrategy::Path));
    let mut env = FakeEnv::browser();

    m.navigate(&push("k1").with_path("/docs"), &mut env);
    env.scroll_window(0.0, 640.0);
    m.navigate(&push("k2").with_path("/blog"), &mut env);

    // A different entry showing the same path, reached by traversal.
    m.navigate(&pop("k9").with_path("/docs"), &mut env);
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 640.0));
    assert!(
        m.store()
            .contains(&StoreKey::window(RouteKey::Path("/docs".to_string())))
    );
}

#[test]
fn superseded_navigation_only_keeps_latest_departure() {
    let mut m = ScrollManager::default();
    let mut env = FakeEnv::browser();
    m.navigate(&push("a"), &mut env);

    // Two departures for navigations that never committed, then the real one.
    env.scroll_window(0.0, 100.0);
    m.depart(&mut env);
    env.scroll_window(0.0, 180.0);
    m.depart(&mut env);
    m.arrive(&push("c"), &mut env);

    assert_eq!(m.store().len(), 1);
    assert_eq!(
        m.store().read(&window_key("a")),
        Some(ScrollPosition::new(0.0, 180.0))
    );
}

#[test]
fn window_restorer_works_without_manager() {
    let mut store = PositionStore::new();
    let mut restorer = WindowRestorer::default();
    let mut window = FakeTarget::at(0.0, 0.0);

    assert_eq!(restorer.depart(&mut store, &window), None);
    restorer.navigate(&mut store, &push("a"), &mut window);
    window.position = ScrollPosition::new(3.0, 33.0);
    restorer.navigate(&mut store, &push("b"), &mut window);
    assert_eq!(window.position, ScrollPosition::TOP);

    let restoration = restorer.navigate(&mut store, &pop("a"), &mut window);
    assert_eq!(
        restoration,
        Restoration::Restored(ScrollPosition::new(3.0, 33.0))
    );
    assert_eq!(window.writes, 3);
    assert_eq!(restorer.current_key(), Some(&window_key("a")));
}

#[test]
fn container_restorer_keys_by_id_and_entry() {
    let restorer = ContainerRestorer::new("sidebar", ContainerOptions::default());
    assert_eq!(
        restorer.key_for(&push("a")),
        StoreKey::container(
            ContainerId::from("sidebar"),
            Some(RouteKey::Entry(EntryKey::from("a")))
        )
    );

    let shared = ContainerRestorer::new(
        "sidebar",
        ContainerOptions::default().with_scope(ContainerScope::Shared),
    );
    assert_eq!(
        shared.key_for(&push("a")),
        StoreKey::container(ContainerId::from("sidebar"), None)
    );
}

#[test]
fn injected_store_is_used_and_returned() {
    let mut store = PositionStore::new();
    store.save(window_key("a"), ScrollPosition::new(0.0, 77.0));

    let mut m = ScrollManager::with_store(store, ManagerOptions::default());
    let mut env = FakeEnv::browser();
    m.arrive(&pop("a"), &mut env);
    assert_eq!(env.window_position(), ScrollPosition::new(0.0, 77.0));

    let store = m.into_store();
    assert_eq!(store.len(), 1);
}
