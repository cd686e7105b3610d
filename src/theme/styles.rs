//! Global CSS styles for Folio.
//!
//! Navy and green portfolio palette, hero layout and the fade-up transition
//! classes used by `FadeUp`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NAVY (Backgrounds) */
  --dark-navy: #020c1b;
  --navy: #0a192f;
  --light-navy: #112240;

  /* SLATE (Text) */
  --slate: #8892b0;
  --light-slate: #a8b2d1;
  --lightest-slate: #ccd6f6;

  /* GREEN (Accent, Links) */
  --green: #64ffda;
  --green-tint: rgba(100, 255, 218, 0.1);

  /* Typography */
  --font-sans: 'Calibre', 'Inter', 'San Francisco', 'SF Pro Text', -apple-system, system-ui, sans-serif;
  --font-mono: 'SF Mono', 'Fira Code', 'Fira Mono', 'Roboto Mono', monospace;

  /* Type Scale */
  --fz-xs: 13px;
  --fz-sm: 14px;
  --fz-md: 16px;
  --fz-lg: 18px;
  --fz-xl: 20px;

  /* Layout */
  --nav-height: 100px;
  --border-radius: 4px;

  /* Transitions */
  --easing: cubic-bezier(0.645, 0.045, 0.355, 1);
  --transition: all 0.25s cubic-bezier(0.645, 0.045, 0.355, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  font-size: var(--fz-xl);
  background: var(--navy);
  color: var(--slate);
  line-height: 1.3;
  min-height: 100vh;
  padding: 0 150px;
}

@media (max-width: 1080px) {
  body { padding: 0 100px; }
}

@media (max-width: 768px) {
  body { padding: 0 50px; }
}

@media (max-width: 480px) {
  body { padding: 0 25px; }
}

/* === Typography === */
.big-heading {
  margin: 0;
  color: var(--lightest-slate);
  font-size: clamp(40px, 8vw, 80px);
  font-weight: 600;
  line-height: 1.1;
}

/* === Hero === */
.hero {
  display: flex;
  justify-content: center;
  flex-direction: column;
  align-items: flex-start;
  min-height: 100vh;
  height: 100vh;
  padding: 0;
  position: relative;
}

@media (max-height: 700px) and (min-width: 700px), (max-width: 360px) {
  .hero {
    height: auto;
    padding-top: var(--nav-height);
  }
}

.hero h1 {
  margin: 0 0 30px 4px;
  color: var(--green);
  font-family: var(--font-mono);
  font-size: clamp(var(--fz-sm), 5vw, var(--fz-md));
  font-weight: 400;
}

@media (max-width: 480px) {
  .hero h1 {
    margin: 0 0 20px 2px;
  }
}

.hero h3 {
  margin-top: 5px;
  color: var(--slate);
  font-size: clamp(40px, 8vw, 80px);
  line-height: 0.9;
}

.hero p {
  margin: 20px 0 0;
  max-width: 540px;
}

.email-link {
  display: inline-block;
  margin-top: 50px;
  padding: 1.25rem 1.75rem;
  color: var(--green);
  background-color: transparent;
  border: 1px solid var(--green);
  border-radius: var(--border-radius);
  font-family: var(--font-mono);
  font-size: var(--fz-sm);
  line-height: 1;
  text-decoration: none;
  cursor: pointer;
  transition: var(--transition);
}

.email-link:hover,
.email-link:focus {
  outline: none;
  background-color: var(--green-tint);
  transform: translate(-4px, -4px);
  box-shadow: 4px 4px 0 0 var(--green);
}

/* === Globe === */
.globe-container {
  position: absolute;
  top: 50%;
  right: 5%;
  transform: translateY(-50%);
  width: 300px;
  height: 300px;
}

.globe-canvas {
  width: 100%;
  height: 100%;
}

@media (max-width: 768px) {
  .globe-container {
    width: 200px;
    height: 200px;
  }
}

@media (max-width: 480px) {
  .globe-container {
    display: none;
  }
}

/* === Fade-up Transition === */
.fadeup-enter {
  opacity: 0.01;
  transform: translateY(20px);
  transition: opacity 300ms var(--easing), transform 300ms var(--easing);
}

.fadeup-enter-active {
  opacity: 1;
  transform: translateY(0px);
  transition: opacity 300ms var(--easing), transform 300ms var(--easing);
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
