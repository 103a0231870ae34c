//! Templates for the five custom embed node kinds.
//!
//! Every user-supplied string (title, body, caption, alt, label) is escaped
//! before interpolation. `src`/`href`/`poster` are structural attributes and
//! pass through as stored; width/height are typed numerically in the model, so
//! they cannot smuggle markup into the inline style. Optional fields omit
//! their markup entirely — no empty attributes or elements.

use crate::html::escape_html;
use crate::nodes::{CalloutNode, CardNode, ImageNode, ThumbnailNode, VideoNode};

pub(crate) fn image_to_html(img: &ImageNode, out: &mut String) {
    out.push_str("<figure class=\"rt-image\"><img src=\"");
    out.push_str(&img.src);
    out.push('"');
    if let Some(alt) = &img.alt {
        out.push_str(&format!(" alt=\"{}\"", escape_html(alt)));
    }
    out.push('>');
    if let Some(caption) = &img.caption {
        out.push_str(&format!("<figcaption>{}</figcaption>", escape_html(caption)));
    }
    out.push_str("</figure>");
}

pub(crate) fn card_to_html(card: &CardNode, out: &mut String) {
    out.push_str("<div class=\"rt-card\">");
    if let Some(image) = &card.image {
        out.push_str(&format!(
            "<img class=\"rt-card-image\" src=\"{}\"",
            image.src
        ));
        if let Some(alt) = &image.alt {
            out.push_str(&format!(" alt=\"{}\"", escape_html(alt)));
        }
        out.push('>');
    }
    out.push_str(&format!(
        "<div class=\"rt-card-body\"><h3>{}</h3><p>{}</p>",
        escape_html(&card.title),
        escape_html(&card.body)
    ));
    if let Some(link) = &card.link {
        out.push_str(&format!(
            "<a class=\"rt-card-link\" href=\"{}\">{}</a>",
            link.href,
            escape_html(&link.label)
        ));
    }
    out.push_str("</div></div>");
}

pub(crate) fn video_to_html(video: &VideoNode, out: &mut String) {
    out.push_str(&format!("<video class=\"rt-video\" src=\"{}\"", video.src));
    if let Some(poster) = &video.poster {
        out.push_str(&format!(" poster=\"{}\"", poster));
    }
    if video.autoplay {
        out.push_str(" autoplay");
    }
    if video.controls {
        out.push_str(" controls");
    }
    if video.loop_ {
        out.push_str(" loop");
    }
    if video.muted {
        out.push_str(" muted");
    }
    out.push_str("></video>");
}

pub(crate) fn thumbnail_to_html(thumb: &ThumbnailNode, out: &mut String) {
    out.push_str(&format!(
        "<figure class=\"rt-thumbnail rt-thumbnail--{}\"",
        thumb.align.as_str()
    ));
    let mut style = String::new();
    if let Some(w) = thumb.width {
        style.push_str(&format!("width:{}px;", w));
    }
    if let Some(h) = thumb.height {
        style.push_str(&format!("height:{}px;", h));
    }
    if !style.is_empty() {
        out.push_str(&format!(" style=\"{}\"", style));
    }
    out.push('>');
    let img = format!(
        "<img src=\"{}\" alt=\"{}\">",
        thumb.src,
        escape_html(&thumb.alt)
    );
    match &thumb.href {
        Some(href) => out.push_str(&format!("<a href=\"{}\">{}</a>", href, img)),
        None => out.push_str(&img),
    }
    if let Some(caption) = &thumb.caption {
        out.push_str(&format!("<figcaption>{}</figcaption>", escape_html(caption)));
    }
    out.push_str("</figure>");
}

pub(crate) fn callout_to_html(callout: &CalloutNode, out: &mut String) {
    let title = callout.title.as_deref().unwrap_or("Note");
    out.push_str(&format!(
        "<aside class=\"rt-callout rt-callout--{}\"><p class=\"rt-callout-title\">{}</p><p class=\"rt-callout-body\">{}</p></aside>",
        callout.variant.as_str(),
        escape_html(title),
        escape_html(&callout.body)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{CalloutVariant, CardImage, CardLink, ThumbnailAlign};

    #[test]
    fn image_omits_absent_optionals() {
        let img = ImageNode {
            src: "/media/a.jpg".into(),
            alt: None,
            caption: None,
        };
        let mut out = String::new();
        image_to_html(&img, &mut out);
        assert_eq!(
            out,
            "<figure class=\"rt-image\"><img src=\"/media/a.jpg\"></figure>"
        );
    }

    #[test]
    fn card_escapes_user_strings_but_not_urls() {
        let card = CardNode {
            title: "A <b>title</b>".into(),
            body: "body".into(),
            image: Some(CardImage {
                src: "/img?a=1&b=2".into(),
                alt: Some("\"quoted\"".into()),
            }),
            link: Some(CardLink {
                href: "/read-more?x=1&y=2".into(),
                label: "More > here".into(),
            }),
        };
        let mut out = String::new();
        card_to_html(&card, &mut out);
        assert!(out.contains("<h3>A &lt;b&gt;title&lt;/b&gt;</h3>"));
        assert!(out.contains("src=\"/img?a=1&b=2\""));
        assert!(out.contains("alt=\"&quot;quoted&quot;\""));
        assert!(out.contains("href=\"/read-more?x=1&y=2\""));
        assert!(out.contains(">More &gt; here</a>"));
    }

    #[test]
    fn video_boolean_attributes() {
        let video = VideoNode {
            src: "/v.mp4".into(),
            poster: None,
            autoplay: true,
            controls: true,
            loop_: false,
            muted: true,
        };
        let mut out = String::new();
        video_to_html(&video, &mut out);
        assert_eq!(
            out,
            "<video class=\"rt-video\" src=\"/v.mp4\" autoplay controls muted></video>"
        );
    }

    #[test]
    fn thumbnail_sizes_and_alignment() {
        let thumb = ThumbnailNode {
            src: "/t.png".into(),
            alt: "thumb".into(),
            href: Some("/full.png".into()),
            caption: None,
            width: Some(120),
            height: Some(80),
            align: ThumbnailAlign::Right,
        };
        let mut out = String::new();
        thumbnail_to_html(&thumb, &mut out);
        assert!(out.starts_with(
            "<figure class=\"rt-thumbnail rt-thumbnail--right\" style=\"width:120px;height:80px;\">"
        ));
        assert!(out.contains("<a href=\"/full.png\"><img src=\"/t.png\" alt=\"thumb\"></a>"));
    }

    #[test]
    fn callout_title_defaults_to_note() {
        let callout = CalloutNode {
            variant: CalloutVariant::Warning,
            title: None,
            body: "<script>".into(),
        };
        let mut out = String::new();
        callout_to_html(&callout, &mut out);
        assert!(out.contains("rt-callout--warning"));
        assert!(out.contains("<p class=\"rt-callout-title\">Note</p>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<script>"));
    }
}
