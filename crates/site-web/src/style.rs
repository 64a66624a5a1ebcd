use crate::dom::{el, js_err};
use web_sys as web;

const STYLE_ID: &str = "studio-style";

pub const STYLESHEET: &str = r#"
html, body { margin: 0; background: #0a0f1e; font-family: system-ui, sans-serif; }
.studio { position: relative; min-height: 100vh; width: 100%; overflow: hidden; background: #0a0f1e; color: #fff; }
.bg-gradient { position: fixed; inset: 0; background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a); background-size: 200% 200%; animation: gradient-shift 15s ease infinite; }
.orb { position: fixed; border-radius: 9999px; }
.glow { position: fixed; width: 400px; height: 400px; border-radius: 9999px; background: rgba(16, 185, 129, 0.05); filter: blur(80px); pointer-events: none; transition: all 500ms ease-out; }
.grid-overlay { position: fixed; inset: 0; opacity: 0.02; background-size: 60px 60px;
  background-image: linear-gradient(rgba(255,255,255,0.1) 1px, transparent 1px), linear-gradient(90deg, rgba(255,255,255,0.1) 1px, transparent 1px); }
.noise { position: fixed; inset: 0; opacity: 0.03; mix-blend-mode: overlay;
  background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 400 400' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' /%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)' /%3E%3C/svg%3E"); }
.particles { position: fixed; inset: 0; pointer-events: none; z-index: 0; overflow: hidden; }
.content { position: relative; z-index: 10; min-height: 100vh; display: flex; flex-direction: column; }
section { padding: 5rem 1.25rem; text-align: center; }
.brand { font-size: 5rem; letter-spacing: 0.3em; text-transform: uppercase; margin: 0 0 1.5rem; text-shadow: 0 0 60px rgba(16,185,129,0.4), 0 0 100px rgba(16,185,129,0.2); }
.rule { height: 1px; width: 100%; margin-top: 0.5rem; background: linear-gradient(to right, transparent, rgba(16,185,129,0.5), transparent); }
.rule.wide { width: 12rem; margin: 0 auto 2rem; }
.status, .badge { display: inline-flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; border-radius: 9999px; background: rgba(0,0,0,0.4); border: 1px solid rgba(255,255,255,0.2); }
.pulse-dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; background: #10b981; animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite; }
.section-header { display: inline-block; margin-bottom: 4rem; max-width: 42rem; }
.eyebrow { font-size: 0.875rem; letter-spacing: 0.3em; text-transform: uppercase; color: rgba(52,211,153,0.7); }
.eyebrow.muted { color: #475569; }
.lede { color: #cbd5e1; font-size: 1.125rem; line-height: 1.6; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 3rem; max-width: 80rem; margin: 0 auto; }
.card { position: relative; padding: 2.5rem; border-radius: 2.5rem; border: 1px solid rgba(255,255,255,0.15); background: linear-gradient(135deg, rgba(255,255,255,0.04), rgba(255,255,255,0.01)); transition: transform 700ms; }
.card:hover { transform: scale(1.03); }
.card-art { display: flex; justify-content: center; margin-bottom: 2rem; }
.card-art img { width: 9rem; height: 9rem; border-radius: 2rem; object-fit: cover; }
.tiles { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.5rem; width: 9rem; height: 9rem; padding: 1.5rem; box-sizing: border-box; border-radius: 2rem; background: rgba(16,185,129,0.25); }
.tile { background: rgba(52,211,153,0.3); border-radius: 0.375rem; border: 1px solid rgba(110,231,183,0.4); transition: background 500ms; }
.card:hover .tile { background: rgba(52,211,153,0.5); }
.features { list-style: none; padding: 0; text-align: left; }
.features li { display: flex; flex-direction: column; padding: 0.75rem 1rem; margin-bottom: 1rem; border-left: 2px solid rgba(52,211,153,0.5); border-radius: 1rem; }
.cta { display: flex; align-items: center; justify-content: center; gap: 0.75rem; padding: 1.25rem 1.5rem; border-radius: 1rem; color: #fff; text-decoration: none; border: 1px solid rgba(96,165,250,0.4); }
.accent-violet .cta { background: linear-gradient(to right, rgba(59,130,246,0.25), rgba(168,85,247,0.25)); }
.accent-emerald .cta, .cta.mail { background: linear-gradient(to right, rgba(16,185,129,0.25), rgba(34,197,94,0.25)); border-color: rgba(52,211,153,0.4); }
.cta.mail { display: inline-flex; }
.cta-text { display: flex; flex-direction: column; text-align: left; flex: 1; }
.cta-caption { font-size: 0.75rem; color: #cbd5e1; }
.cta-label { font-weight: 600; }
.note { color: #94a3b8; font-size: 0.875rem; }
footer { padding: 4rem 1.25rem; text-align: center; border-top: 1px solid rgba(255,255,255,0.05); }
.copyright { color: #64748b; font-size: 0.875rem; }
.tagline { color: #475569; font-size: 0.75rem; }
.float { animation: float 8s ease-in-out infinite; }
.float-delayed { animation: float-delayed 10s ease-in-out infinite; }
.fade-in { animation: fade-in 1s ease-out both; }
.fade-in-delayed { animation: fade-in 1s ease-out 0.3s both; }
@keyframes gradient-shift { 0%, 100% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } }
@keyframes float { 0%, 100% { translate: 0 0; } 50% { translate: 0 -20px; } }
@keyframes float-delayed { 0%, 100% { translate: 0 0; } 50% { translate: 0 20px; } }
@keyframes particle { 0% { translate: 0 0; } 50% { translate: 10px -30px; } 100% { translate: 0 0; } }
@keyframes fade-in { from { opacity: 0; translate: 0 10px; } to { opacity: 1; translate: 0 0; } }
@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
"#;

/// Adds the page stylesheet to `<head>` unless it is already there.
pub fn inject(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let style = el(document, "style", "")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}
