//! Global CSS for the "Under the Stars" celestial aesthetic.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --void-deep: #05010f;
  --void-nebula: #0d0628;
  --glass-bg: rgba(255, 255, 255, 0.04);
  --glass-border: rgba(255, 255, 255, 0.14);

  --gold-supernova: #ffcc00;
  --gold-glow: rgba(255, 204, 0, 0.35);
  --gold-faint: rgba(255, 204, 0, 0.1);

  --text-primary: #f5f2ff;
  --text-secondary: rgba(245, 242, 255, 0.75);
  --text-muted: rgba(245, 242, 255, 0.5);

  --danger: #ff4444;
  --success: #51d88a;

  --font-display: 'Orbitron', 'Avenir Next', sans-serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: radial-gradient(ellipse at 50% 0%, var(--void-nebula) 0%, var(--void-deep) 65%);
  color: var(--text-primary);
  font-family: var(--font-body);
  min-height: 100vh;
  overflow-x: hidden;
}

main.page {
  position: relative;
  z-index: 1;
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem 5rem;
}

/* === Starfield backdrop === */
.starfield-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.star {
  position: absolute;
  border-radius: 50%;
  background: var(--gold-supernova);
  opacity: var(--star-opacity, 0.8);
  animation-name: twinkle;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

@keyframes twinkle {
  0%, 100% { opacity: calc(var(--star-opacity, 0.8) * 0.25); }
  50% { opacity: var(--star-opacity, 0.8); }
}

/* === Navigation === */
.nav-header {
  position: relative;
  z-index: 2;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 2rem;
}

.nav-title {
  font-family: var(--font-display);
  letter-spacing: 3px;
  font-size: 1.1rem;
  color: var(--gold-supernova);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-links a {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: 0.85rem;
  text-transform: uppercase;
  letter-spacing: 2px;
  padding-bottom: 2px;
  border-bottom: 1px solid transparent;
  transition: color 150ms ease, border-color 150ms ease;
}

.nav-links a:hover {
  color: var(--text-primary);
}

.nav-links a.active {
  color: var(--gold-supernova);
  border-bottom-color: var(--gold-supernova);
}

/* === Cards and buttons === */
.glass-card {
  background: var(--glass-bg);
  border: 1px solid var(--glass-border);
  border-radius: 16px;
  padding: 2rem;
  backdrop-filter: blur(8px);
}

.cta-nav, .cta-reg {
  font-family: var(--font-display);
  letter-spacing: 2px;
  text-transform: uppercase;
  color: var(--void-deep);
  background: var(--gold-supernova);
  border: none;
  border-radius: 30px;
  padding: 0.9rem 2.2rem;
  font-size: 0.9rem;
  cursor: pointer;
  transition: box-shadow 200ms ease, transform 200ms ease;
}

.cta-nav:hover:not(:disabled), .cta-reg:hover {
  box-shadow: 0 0 25px var(--gold-glow);
  transform: translateY(-2px);
}

.cta-nav:disabled {
  opacity: 0.5;
  cursor: wait;
}

.cta-reg {
  font-size: 1.05rem;
  padding: 1.1rem 3rem;
}

.glass-btn {
  color: var(--text-primary);
  background: var(--glass-bg);
  border: 1px solid var(--glass-border);
  border-radius: 30px;
  padding: 0.8rem 1.8rem;
  font-size: 0.9rem;
  cursor: pointer;
  transition: border-color 150ms ease;
}

.glass-btn:hover {
  border-color: var(--gold-supernova);
}

.glass-btn.danger {
  border-color: var(--danger);
  color: var(--danger);
}

/* === Typography === */
.orbitron {
  font-family: var(--font-display);
}

.text-gradient-gold {
  background: linear-gradient(120deg, #fff3c4, var(--gold-supernova) 55%, #b8860b);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.celestial-title {
  font-size: 4rem;
  letter-spacing: 6px;
  text-align: center;
}

.section-title {
  font-size: 2.6rem;
  margin-bottom: 2.5rem;
  text-align: center;
}

.body-text {
  line-height: 1.8;
  color: var(--text-secondary);
  font-size: 1.05rem;
}

/* === Form === */
.registration-launchpad {
  max-width: 850px;
  margin: 0 auto;
}

.input-group {
  margin-bottom: 1.5rem;
}

.input-label {
  display: block;
  margin-bottom: 0.6rem;
  font-size: 0.95rem;
  color: var(--text-secondary);
}

.required-mark {
  color: var(--gold-supernova);
}

.input-field {
  width: 100%;
  background: rgba(0, 0, 0, 0.3);
  border: 1px solid var(--glass-border);
  border-radius: 10px;
  color: var(--text-primary);
  padding: 0.85rem 1rem;
  font-size: 1rem;
  font-family: var(--font-body);
  transition: border-color 150ms ease;
}

.input-field:focus {
  outline: none;
  border-color: var(--gold-supernova);
  box-shadow: 0 0 12px var(--gold-faint);
}

.input-field.invalid {
  border-color: var(--danger);
}

select.input-field option {
  background: var(--void-nebula);
}

.choice-group {
  display: flex;
  flex-wrap: wrap;
  gap: 0.8rem;
  border-radius: 12px;
}

.choice-group.invalid {
  outline: 1px solid var(--danger);
  outline-offset: 4px;
}

.choice-btn {
  background: var(--glass-bg);
  border: 1px solid var(--glass-border);
  border-radius: 10px;
  color: var(--text-primary);
  padding: 0.75rem 1.3rem;
  font-size: 0.9rem;
  cursor: pointer;
  transition: border-color 150ms ease, background 150ms ease;
}

.choice-btn:hover {
  border-color: var(--gold-supernova);
}

.choice-btn.selected {
  background: var(--gold-faint);
  border-color: var(--gold-supernova);
  color: var(--gold-supernova);
}

/* === Step indicator === */
.step-indicator {
  display: flex;
  gap: 1rem;
  margin-bottom: 3rem;
  justify-content: center;
  flex-wrap: wrap;
}

.step {
  width: 34px;
  height: 6px;
  border-radius: 3px;
  background: var(--glass-border);
  transition: background 300ms ease;
}

.step.active {
  background: var(--gold-supernova);
  box-shadow: 0 0 10px var(--gold-glow);
}

.step.completed {
  background: rgba(255, 204, 0, 0.5);
}

/* === Zodiac grid === */
.zodiac-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.8rem;
  margin-top: 0.5rem;
}

.zodiac-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.2rem;
  background: var(--glass-bg);
  border: 1px solid var(--glass-border);
  border-radius: 12px;
  padding: 0.8rem 0.4rem;
  cursor: pointer;
  transition: border-color 150ms ease, background 150ms ease;
}

.zodiac-item:hover {
  border-color: var(--gold-supernova);
}

.zodiac-item.selected {
  background: var(--gold-faint);
  border-color: var(--gold-supernova);
}

.zodiac-icon {
  font-size: 1.6rem;
  color: var(--gold-supernova);
}

.zodiac-name {
  font-size: 0.85rem;
}

.zodiac-trait {
  font-size: 0.7rem;
  color: var(--text-muted);
}

.zodiac-center {
  grid-column: span 2;
  grid-row: span 2;
  position: relative;
  min-height: 250px;
  border-radius: 12px;
  border: 1px solid var(--glass-border);
  background: rgba(0, 0, 0, 0.35);
  overflow: hidden;
}

.zodiac-center svg {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
}

/* === Signature pad === */
.signature-surface {
  background: #fff;
  border-radius: 10px;
  margin-bottom: 1.5rem;
  position: relative;
  overflow: hidden;
  height: 200px;
  cursor: crosshair;
  touch-action: none;
}

.signature-surface.invalid {
  outline: 2px solid var(--danger);
}

.signature-hint {
  position: absolute;
  bottom: 5px;
  right: 8px;
  color: #333;
  font-size: 0.7rem;
  opacity: 0.5;
  pointer-events: none;
}

/* === Detail boxes, fee, people === */
.conference-details {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.detail-box {
  padding: 1.5rem;
  text-align: center;
}

.detail-box h4 {
  font-size: 0.75rem;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 2px;
  margin-bottom: 0.5rem;
}

.fee-card {
  max-width: 250px;
  margin: 2rem auto 0;
  text-align: center;
  border-color: var(--gold-supernova);
}

.fee-card p {
  font-weight: 800;
  font-size: 1.3rem;
  color: var(--gold-supernova);
}

.speaker-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 3rem;
  justify-items: center;
}

.speaker-planet {
  text-align: center;
  max-width: 260px;
}

.planet-avatar {
  width: 130px;
  height: 130px;
  margin: 0 auto;
  border-radius: 50%;
  border: 2px solid rgba(255, 204, 0, 0.3);
  background: radial-gradient(circle at 35% 30%, var(--void-nebula), var(--void-deep));
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-display);
  font-size: 2rem;
  color: var(--gold-supernova);
}

/* === Terms, notices, success === */
.terms-item {
  display: flex;
  gap: 1rem;
  margin-bottom: 1rem;
  color: var(--text-secondary);
  line-height: 1.6;
}

.form-nav {
  margin-top: 3rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.submit-error {
  margin-top: 1.5rem;
  text-align: center;
  color: var(--danger);
}

.upload-status {
  font-size: 0.85rem;
  margin-top: 0.6rem;
  color: var(--text-muted);
}

.upload-status.ready { color: var(--success); }
.upload-status.failed { color: var(--danger); }

.upload-box {
  border: 2px dashed var(--gold-supernova);
  text-align: center;
}

.success-view {
  text-align: center;
  padding: 4rem 2rem;
}

.success-view svg {
  margin: 0 auto;
  display: block;
  filter: drop-shadow(0 0 15px rgba(255, 204, 0, 0.5));
}

/* === Hero === */
.hero {
  text-align: center;
  padding: 5rem 0 3rem;
}

.quote-section {
  text-align: center;
  padding: 6rem 0;
}

.quote-section blockquote {
  font-style: italic;
  font-size: 1.8rem;
  max-width: 800px;
  margin: 0 auto;
  color: var(--gold-supernova);
  font-family: serif;
}
"#;
