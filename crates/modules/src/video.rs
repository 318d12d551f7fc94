//! Embedded video: YouTube, Vimeo or a self-hosted MP4.
//!
//! Hosted videos embed through the providers' privacy-enhanced players.
//! Problems with the URL are reported as diagnostic markup in place of the
//! player, never as an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use trellis_module_core::{
    FieldSchema, FieldSpec, ModuleDefinition, SettingsExt, SettingsMap, escape_attr, escape_html,
    standard_design_fields,
};
use trellis_style::sanitize_value;

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/|v/|shorts/)|youtu\.be/)([A-Za-z0-9_-]+)")
        .expect("BUG: invalid YOUTUBE_ID regex literal")
});

static VIMEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"vimeo\.com/(?:video/)?(\d+)").expect("BUG: invalid VIMEO_ID regex literal")
});

static ABSOLUTE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://\S+$").expect("BUG: invalid ABSOLUTE_URL regex literal")
});

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Where the video is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoSource {
    #[default]
    YouTube,
    Vimeo,
    SelfHosted,
}

impl VideoSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoSource::YouTube => "youtube",
            VideoSource::Vimeo => "vimeo",
            VideoSource::SelfHosted => "self_hosted",
        }
    }
}

impl FromStr for VideoSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(VideoSource::YouTube),
            "vimeo" => Ok(VideoSource::Vimeo),
            "self_hosted" => Ok(VideoSource::SelfHosted),
            other => Err(format!("unknown video source '{}'", other)),
        }
    }
}

/// The video id of a YouTube watch, embed, short or `youtu.be` URL.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The numeric id of a Vimeo page or player URL.
pub fn extract_vimeo_id(url: &str) -> Option<&str> {
    VIMEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn aspect_padding(ratio: &str) -> &'static str {
    match ratio {
        "4_3" => "75%",
        "21_9" => "42.86%",
        "1_1" => "100%",
        "9_16" => "177.78%",
        _ => "56.25%",
    }
}

#[derive(Debug, Clone, Copy)]
struct Playback {
    autoplay: bool,
    looped: bool,
    controls: bool,
    muted: bool,
}

impl Playback {
    fn from_settings(settings: &SettingsMap) -> Self {
        Self {
            autoplay: settings.flag("autoplay", false),
            looped: settings.flag("loop", false),
            controls: settings.flag("controls", true),
            muted: settings.flag("muted", false),
        }
    }

    /// Browsers only autoplay muted media.
    fn effectively_muted(&self) -> bool {
        self.muted || self.autoplay
    }
}

fn youtube_embed_url(id: &str, playback: Playback) -> String {
    let mut params = Vec::new();
    if playback.autoplay {
        params.push("autoplay=1".to_string());
    }
    if playback.effectively_muted() {
        params.push("mute=1".to_string());
    }
    if playback.looped {
        params.push("loop=1".to_string());
        params.push(format!("playlist={}", id));
    }
    if !playback.controls {
        params.push("controls=0".to_string());
    }
    params.push("rel=0".to_string());
    params.push("modestbranding=1".to_string());
    format!(
        "https://www.youtube-nocookie.com/embed/{}?{}",
        id,
        params.join("&")
    )
}

fn vimeo_embed_url(id: &str, playback: Playback) -> String {
    let mut params = Vec::new();
    if playback.autoplay {
        params.push("autoplay=1");
    }
    if playback.effectively_muted() {
        params.push("muted=1");
    }
    if playback.looped {
        params.push("loop=1");
    }
    if !playback.controls {
        params.push("background=1");
    }
    params.push("dnt=1");
    format!("https://player.vimeo.com/video/{}?{}", id, params.join("&"))
}

fn diagnostic(kind: &str, message: &str) -> String {
    log::debug!("Video module rendered {} diagnostic: {}", kind, message);
    format!(
        "<div class=\"trellis-video trellis-video--{}\"><p>{}</p></div>",
        kind, message
    )
}

fn iframe(src: &str, title: &str) -> String {
    format!(
        "<iframe class=\"trellis-video__iframe\" src=\"{}\" title=\"{}\" frameborder=\"0\" allow=\"{}\" allowfullscreen style=\"position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: 0;\"></iframe>",
        escape_attr(src),
        escape_attr(title),
        IFRAME_ALLOW
    )
}

fn video_element(url: &str, poster: Option<&str>, title: &str, playback: Playback) -> String {
    let mut attributes = vec!["playsinline"];
    if playback.autoplay {
        attributes.push("autoplay");
    }
    if playback.effectively_muted() {
        attributes.push("muted");
    }
    if playback.looped {
        attributes.push("loop");
    }
    if playback.controls {
        attributes.push("controls");
    }
    let poster = poster
        .map(|p| format!(" poster=\"{}\"", escape_attr(p)))
        .unwrap_or_default();
    format!(
        "<video class=\"trellis-video__player\" title=\"{}\"{} {} style=\"position: absolute; top: 0; left: 0; width: 100%; height: 100%; object-fit: cover;\"><source src=\"{}\" type=\"video/mp4\">Your browser does not support the video tag.</video>",
        escape_attr(title),
        poster,
        attributes.join(" "),
        escape_attr(url)
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VideoModule;

impl ModuleDefinition for VideoModule {
    fn slug(&self) -> &str {
        "video"
    }

    fn name(&self) -> &str {
        "Video"
    }

    fn get_content_fields(&self) -> FieldSchema {
        FieldSchema::new()
            .with(
                "video_source",
                FieldSpec::select(
                    "Video Source",
                    &[
                        ("youtube", "YouTube"),
                        ("vimeo", "Vimeo"),
                        ("self_hosted", "Self-Hosted (MP4)"),
                    ],
                )
                .with_default("youtube"),
            )
            .with(
                "video_url",
                FieldSpec::url("Video URL").with_description("YouTube/Vimeo URL or direct MP4 link"),
            )
            .with(
                "poster_image",
                FieldSpec::url("Poster Image").with_description("Shown before a self-hosted video plays"),
            )
            .with(
                "title",
                FieldSpec::text("Video Title").with_default("Embedded video"),
            )
            .with("description", FieldSpec::textarea("Caption"))
            .with(
                "aspect_ratio",
                FieldSpec::select(
                    "Aspect Ratio",
                    &[
                        ("16_9", "16:9 (Widescreen)"),
                        ("4_3", "4:3 (Standard)"),
                        ("21_9", "21:9 (Ultrawide)"),
                        ("1_1", "1:1 (Square)"),
                        ("9_16", "9:16 (Vertical)"),
                    ],
                )
                .with_default("16_9"),
            )
            .with(
                "max_width",
                FieldSpec::select(
                    "Max Width",
                    &[
                        ("100%", "Full Width"),
                        ("800px", "800px"),
                        ("1000px", "1000px"),
                        ("1200px", "1200px"),
                    ],
                )
                .with_default("100%"),
            )
            .with(
                "alignment",
                FieldSpec::select(
                    "Alignment",
                    &[("left", "Left"), ("center", "Center"), ("right", "Right")],
                )
                .with_default("center"),
            )
            .with("autoplay", FieldSpec::toggle("Autoplay"))
            .with("loop", FieldSpec::toggle("Loop"))
            .with("controls", FieldSpec::toggle("Show Controls").with_default(true))
            .with("muted", FieldSpec::toggle("Muted"))
    }

    fn get_design_fields(&self) -> FieldSchema {
        let mut fields = FieldSchema::new()
            .with("border_radius", FieldSpec::text("Corner Radius").with_default("8px"))
            .with(
                "caption_alignment",
                FieldSpec::select(
                    "Caption Alignment",
                    &[("left", "Left"), ("center", "Center"), ("right", "Right")],
                )
                .with_default("center"),
            )
            .with("caption_color", FieldSpec::color("Caption Color").with_default("#6b7280"))
            .with("caption_font_size", FieldSpec::text("Caption Font Size").with_default("14px"));
        fields.extend(standard_design_fields());
        fields
    }

    fn render(&self, settings: &SettingsMap) -> String {
        let url = settings.text_or("video_url", "");
        let url = url.trim();
        if url.is_empty() {
            return diagnostic(
                "empty",
                "No video URL provided. Add a video URL in the settings panel.",
            );
        }

        let source = settings
            .text("video_source")
            .and_then(|s| s.parse::<VideoSource>().ok())
            .unwrap_or_default();
        let title = settings.text_or("title", "Embedded video");
        let playback = Playback::from_settings(settings);

        let player = match source {
            VideoSource::YouTube => match extract_youtube_id(url) {
                Some(id) => iframe(&youtube_embed_url(id, playback), &title),
                None => {
                    return diagnostic("error", "Invalid YouTube URL. Please check the video URL.");
                }
            },
            VideoSource::Vimeo => match extract_vimeo_id(url) {
                Some(id) => iframe(&vimeo_embed_url(id, playback), &title),
                None => {
                    return diagnostic("error", "Invalid Vimeo URL. Please check the video URL.");
                }
            },
            VideoSource::SelfHosted => {
                if !ABSOLUTE_URL.is_match(url) && !url.starts_with('/') {
                    return diagnostic(
                        "error",
                        "Invalid video URL. Please provide a valid MP4 URL.",
                    );
                }
                let poster = settings.text("poster_image");
                video_element(url, poster.as_deref(), &title, playback)
            }
        };

        let margin = match &*settings.text_or("alignment", "center") {
            "left" => "margin-right: auto",
            "right" => "margin-left: auto",
            _ => "margin: 0 auto",
        };
        let mut html = format!(
            "<div class=\"trellis-video trellis-video--{}\" data-video-source=\"{}\" style=\"max-width: {}; {}\">",
            source.as_str(),
            source.as_str(),
            escape_attr(&sanitize_value(&settings.text_or("max_width", "100%"))),
            margin
        );
        html.push_str(&format!(
            "<div class=\"trellis-video__wrapper\" style=\"position: relative; width: 100%; padding-bottom: {}; border-radius: {}; overflow: hidden\">",
            aspect_padding(&settings.text_or("aspect_ratio", "16_9")),
            escape_attr(&sanitize_value(&settings.text_or("border_radius", "0"))),
        ));
        html.push_str(&player);
        html.push_str("</div>");

        if let Some(caption) = settings.text("description") {
            html.push_str(&format!(
                "<p class=\"trellis-video__caption\" style=\"text-align: {}; color: {}; font-size: {}; margin-top: 12px;\">{}</p>",
                escape_attr(&settings.text_or("caption_alignment", "center")),
                escape_attr(&settings.text_or("caption_color", "#6b7280")),
                escape_attr(&settings.text_or("caption_font_size", "14px")),
                escape_html(&caption)
            ));
        }
        html.push_str("</div>");
        html
    }
}
