//! Hero lifecycle tests
//!
//! Drive a live `VirtualDom` on a paused tokio clock so the hooks' effects and
//! timers actually run: the reveal after `nav_delay`, the fade-up stages, and
//! teardown before the timer fires.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::HeroConfig;
use folio_ui::{HeroSection, Host, StaticHost};

// ============================================================================
// Test Utilities
// ============================================================================

fn desktop_host() -> Host {
    Host::Static(StaticHost {
        viewport_width: Some(1280.0),
        prefers_reduced_motion: Some(false),
    })
}

#[component]
fn MountedHero() -> Element {
    use_context_provider(desktop_host);
    rsx! {
        HeroSection { config: HeroConfig::default() }
    }
}

/// Unmounts the hero `after_ms` after mount.
#[component]
fn ShortLivedHero(after_ms: u64) -> Element {
    use_context_provider(desktop_host);
    let mut show = use_signal(|| true);
    use_hook(|| {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(after_ms)).await;
            show.set(false);
        })
    });

    rsx! {
        if show() {
            HeroSection { config: HeroConfig::default() }
        } else {
            p { "unmounted" }
        }
    }
}

/// Process effects, tasks and re-renders for `duration` of virtual time.
async fn drive(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    loop {
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        if remaining.is_zero() {
            break;
        }
        if tokio::time::timeout(remaining, dom.wait_for_work()).await.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

fn html(dom: &VirtualDom) -> String {
    dioxus::ssr::render(dom)
}

// ============================================================================
// Reveal
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_blocks_hidden_until_nav_delay() {
    let mut dom = VirtualDom::new(MountedHero);
    dom.rebuild_in_place();
    assert!(!html(&dom).contains("Chetan Aditya"));

    drive(&mut dom, Duration::from_millis(990)).await;
    let page = html(&dom);
    assert!(!page.contains("Chetan Aditya"), "{}", page);
    assert!(!page.contains("fadeup"), "{}", page);
}

#[tokio::test(start_paused = true)]
async fn test_blocks_revealed_with_stagger_after_nav_delay() {
    let mut dom = VirtualDom::new(MountedHero);
    dom.rebuild_in_place();

    drive(&mut dom, Duration::from_millis(1100)).await;
    let page = html(&dom);

    assert!(page.contains("Chetan Aditya"), "{}", page);
    assert!(page.contains("Check out my resume"), "{}", page);
    let mut last_position = 0;
    for delay in [100, 200, 300, 400, 500] {
        let marker = format!("transition-delay: {}ms", delay);
        let position = page
            .find(&marker)
            .unwrap_or_else(|| panic!("missing {:?} in {}", marker, page));
        assert!(position >= last_position, "{:?} out of order", marker);
        last_position = position;
    }
    assert_eq!(page.matches("fadeup-enter-active").count(), 5, "{}", page);
}

#[tokio::test(start_paused = true)]
async fn test_fade_up_settles_after_loader_delay() {
    let mut dom = VirtualDom::new(MountedHero);
    dom.rebuild_in_place();

    drive(&mut dom, Duration::from_millis(1000 + 2100)).await;
    let page = html(&dom);

    assert_eq!(page.matches("fadeup-enter-done").count(), 5, "{}", page);
    assert!(!page.contains("fadeup-enter-active"));
}

#[tokio::test(start_paused = true)]
async fn test_revealed_content_stays_after_further_work() {
    let mut dom = VirtualDom::new(MountedHero);
    dom.rebuild_in_place();

    drive(&mut dom, Duration::from_millis(1100)).await;
    drive(&mut dom, Duration::from_secs(10)).await;

    assert!(html(&dom).contains("Chetan Aditya"));
}

// ============================================================================
// Teardown
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_unmount_before_expiry_reveals_nothing() {
    let mut dom = VirtualDom::new_with_props(ShortLivedHero, ShortLivedHeroProps { after_ms: 400 });
    dom.rebuild_in_place();

    drive(&mut dom, Duration::from_millis(500)).await;
    assert!(html(&dom).contains("unmounted"));

    drive(&mut dom, Duration::from_secs(3)).await;
    let page = html(&dom);
    assert!(page.contains("unmounted"), "{}", page);
    assert!(!page.contains("Chetan Aditya"), "{}", page);
    assert!(!page.contains("fadeup"), "{}", page);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_dom_before_expiry() {
    let mut dom = VirtualDom::new(MountedHero);
    dom.rebuild_in_place();
    drive(&mut dom, Duration::from_millis(300)).await;
    drop(dom);

    // The timer deadline passes with no live component to update
    tokio::time::sleep(Duration::from_secs(2)).await;
}
