use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlLinkElement;

use crate::constants::{ACCENT_COLOR, PAGE_BACKGROUND};

#[derive(Debug, Clone, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime: &'static str,
    pub purpose: &'static str,
}

/// Web app manifest, serialized with the member names browsers expect.
#[derive(Debug, Clone, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub orientation: &'static str,
    pub icons: Vec<ManifestIcon>,
    pub categories: Vec<&'static str>,
    pub lang: &'static str,
    pub dir: &'static str,
}

pub fn site_manifest() -> WebManifest {
    let icon = |src, sizes| ManifestIcon {
        src,
        sizes,
        mime: "image/png",
        purpose: "any",
    };
    WebManifest {
        name: "Ramesh Maharjan - Full Stack Developer",
        short_name: "Ramesh Dev",
        description: "Expert Full Stack Developer specializing in React, Next.js, Laravel, PHP, Python Django. Building scalable web applications and enterprise solutions.",
        start_url: "/",
        display: "standalone",
        background_color: PAGE_BACKGROUND,
        theme_color: ACCENT_COLOR,
        orientation: "portrait-primary",
        icons: vec![icon("/icon-192.png", "192x192"), icon("/icon-512.png", "512x512")],
        categories: vec!["business", "productivity", "technology"],
        lang: "en",
        dir: "ltr",
    }
}

/// Attach the manifest to `<head>` as a data URL and set the page title.
pub fn inject() {
    let manifest = site_manifest();
    let json = match serde_json::to_string(&manifest) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("manifest not serialized: {}", e);
            return;
        }
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(manifest.name);
    let Some(head) = document.head() else { return };

    let href = format!(
        "data:application/manifest+json,{}",
        String::from(js_sys::encode_uri_component(&json))
    );
    match document.create_element("link") {
        Ok(el) => {
            let link: HtmlLinkElement = el.unchecked_into();
            link.set_rel("manifest");
            link.set_href(&href);
            if let Err(e) = head.append_child(&link) {
                log::warn!("manifest link not attached: {:?}", e);
            }
        }
        Err(e) => log::warn!("manifest link not created: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_manifest_member_names() {
        let json = serde_json::to_value(site_manifest()).unwrap();
        assert_eq!(json["short_name"], "Ramesh Dev");
        assert_eq!(json["start_url"], "/");
        assert_eq!(json["display"], "standalone");
        assert_eq!(json["theme_color"], "#10b981");
        assert_eq!(json["background_color"], "#020617");
        assert_eq!(json["orientation"], "portrait-primary");
        assert_eq!(json["dir"], "ltr");
    }

    #[test]
    fn icons_use_type_key() {
        let json = serde_json::to_value(site_manifest()).unwrap();
        let icons = json["icons"].as_array().unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[1]["type"], "image/png");
        assert_eq!(icons[1]["sizes"], "512x512");
        assert!(icons[0].get("mime").is_none());
    }
}
