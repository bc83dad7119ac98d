//! HTML tag catalog
//!
//! The closed set of standard HTML tags and the element interface each one is
//! constructed with (the `HTMLElementTagNameMap` of a browser).
//!
//! Everything here comes out of one table, so the runtime enum, the
//! compile-time marker types in [`tag`] and the interface markers in
//! [`interfaces`] cannot drift apart.
//!
//! ```text
//! TagName::A  ──interface()──▶  "HTMLAnchorElement"
//! tag::A      ──KnownTag────▶   interfaces::HtmlAnchorElement
//! ```

use crate::error::DomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static type of an element view.
///
/// Implemented by the uninhabited marker types in [`interfaces`].
pub trait HtmlInterface: 'static {
    /// DOM interface name, e.g. `"HTMLAnchorElement"`
    const NAME: &'static str;

    /// Whether an element constructed with `interface_name` is an instance
    /// of this interface
    fn accepts(interface_name: &str) -> bool {
        interface_name == Self::NAME
    }
}

/// Compile-time tag literal.
///
/// There is one implementor per member of the closed tag set, so naming a tag
/// outside the set does not compile.
pub trait KnownTag: 'static {
    const TAG: TagName;
    type Interface: HtmlInterface;
}

macro_rules! html_interfaces {
    ($( $marker:ident => $name:literal ),* $(,)?) => {
        /// Element interface markers.
        ///
        /// These are never instantiated; they only parameterise
        /// [`Element`](crate::element::Element).
        pub mod interfaces {
            /// Generic element interface, shared by every HTML element
            #[derive(Debug)]
            pub enum HtmlElement {}

            impl super::HtmlInterface for HtmlElement {
                const NAME: &'static str = "HTMLElement";

                fn accepts(_interface_name: &str) -> bool {
                    true
                }
            }

            $(
                #[doc = concat!("`", $name, "`")]
                #[derive(Debug)]
                pub enum $marker {}

                impl super::HtmlInterface for $marker {
                    const NAME: &'static str = $name;
                }
            )*
        }
    };
}

html_interfaces! {
    HtmlAnchorElement => "HTMLAnchorElement",
    HtmlAreaElement => "HTMLAreaElement",
    HtmlAudioElement => "HTMLAudioElement",
    HtmlBaseElement => "HTMLBaseElement",
    HtmlBodyElement => "HTMLBodyElement",
    HtmlBrElement => "HTMLBRElement",
    HtmlButtonElement => "HTMLButtonElement",
    HtmlCanvasElement => "HTMLCanvasElement",
    HtmlDataElement => "HTMLDataElement",
    HtmlDataListElement => "HTMLDataListElement",
    HtmlDetailsElement => "HTMLDetailsElement",
    HtmlDialogElement => "HTMLDialogElement",
    HtmlDivElement => "HTMLDivElement",
    HtmlDListElement => "HTMLDListElement",
    HtmlEmbedElement => "HTMLEmbedElement",
    HtmlFieldSetElement => "HTMLFieldSetElement",
    HtmlFormElement => "HTMLFormElement",
    HtmlHeadElement => "HTMLHeadElement",
    HtmlHeadingElement => "HTMLHeadingElement",
    HtmlHrElement => "HTMLHRElement",
    HtmlHtmlElement => "HTMLHtmlElement",
    HtmlIFrameElement => "HTMLIFrameElement",
    HtmlImageElement => "HTMLImageElement",
    HtmlInputElement => "HTMLInputElement",
    HtmlLabelElement => "HTMLLabelElement",
    HtmlLegendElement => "HTMLLegendElement",
    HtmlLiElement => "HTMLLIElement",
    HtmlLinkElement => "HTMLLinkElement",
    HtmlMapElement => "HTMLMapElement",
    HtmlMenuElement => "HTMLMenuElement",
    HtmlMetaElement => "HTMLMetaElement",
    HtmlMeterElement => "HTMLMeterElement",
    HtmlModElement => "HTMLModElement",
    HtmlObjectElement => "HTMLObjectElement",
    HtmlOListElement => "HTMLOListElement",
    HtmlOptGroupElement => "HTMLOptGroupElement",
    HtmlOptionElement => "HTMLOptionElement",
    HtmlOutputElement => "HTMLOutputElement",
    HtmlParagraphElement => "HTMLParagraphElement",
    HtmlPictureElement => "HTMLPictureElement",
    HtmlPreElement => "HTMLPreElement",
    HtmlProgressElement => "HTMLProgressElement",
    HtmlQuoteElement => "HTMLQuoteElement",
    HtmlScriptElement => "HTMLScriptElement",
    HtmlSelectElement => "HTMLSelectElement",
    HtmlSlotElement => "HTMLSlotElement",
    HtmlSourceElement => "HTMLSourceElement",
    HtmlSpanElement => "HTMLSpanElement",
    HtmlStyleElement => "HTMLStyleElement",
    HtmlTableCaptionElement => "HTMLTableCaptionElement",
    HtmlTableCellElement => "HTMLTableCellElement",
    HtmlTableColElement => "HTMLTableColElement",
    HtmlTableElement => "HTMLTableElement",
    HtmlTableRowElement => "HTMLTableRowElement",
    HtmlTableSectionElement => "HTMLTableSectionElement",
    HtmlTemplateElement => "HTMLTemplateElement",
    HtmlTextAreaElement => "HTMLTextAreaElement",
    HtmlTimeElement => "HTMLTimeElement",
    HtmlTitleElement => "HTMLTitleElement",
    HtmlTrackElement => "HTMLTrackElement",
    HtmlUListElement => "HTMLUListElement",
    HtmlUnknownElement => "HTMLUnknownElement",
    HtmlVideoElement => "HTMLVideoElement",
}

macro_rules! html_tags {
    ($( $variant:ident => $name:literal : $interface:ident ),* $(,)?) => {
        /// A member of the closed set of standard HTML tags
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum TagName {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl TagName {
            /// Every standard tag, in alphabetical order
            pub const ALL: &'static [TagName] = &[$(TagName::$variant),*];

            /// Lower-case tag identifier
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TagName::$variant => $name,)*
                }
            }

            /// Name of the interface elements of this tag are constructed with
            pub const fn interface(self) -> &'static str {
                match self {
                    $(TagName::$variant => <interfaces::$interface as HtmlInterface>::NAME,)*
                }
            }
        }

        /// Tag literals, one marker type per standard tag.
        ///
        /// ```
        /// use dom::{tag, KnownTag, TagName};
        ///
        /// assert_eq!(tag::Summary::TAG, TagName::Summary);
        /// ```
        pub mod tag {
            $(
                #[doc = concat!("`<", $name, ">`")]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
                pub struct $variant;

                impl super::KnownTag for $variant {
                    const TAG: super::TagName = super::TagName::$variant;
                    type Interface = super::interfaces::$interface;
                }
            )*
        }
    };
}

html_tags! {
    A => "a": HtmlAnchorElement,
    Abbr => "abbr": HtmlElement,
    Address => "address": HtmlElement,
    Area => "area": HtmlAreaElement,
    Article => "article": HtmlElement,
    Aside => "aside": HtmlElement,
    Audio => "audio": HtmlAudioElement,
    B => "b": HtmlElement,
    Base => "base": HtmlBaseElement,
    Bdi => "bdi": HtmlElement,
    Bdo => "bdo": HtmlElement,
    Blockquote => "blockquote": HtmlQuoteElement,
    Body => "body": HtmlBodyElement,
    Br => "br": HtmlBrElement,
    Button => "button": HtmlButtonElement,
    Canvas => "canvas": HtmlCanvasElement,
    Caption => "caption": HtmlTableCaptionElement,
    Cite => "cite": HtmlElement,
    Code => "code": HtmlElement,
    Col => "col": HtmlTableColElement,
    Colgroup => "colgroup": HtmlTableColElement,
    Data => "data": HtmlDataElement,
    Datalist => "datalist": HtmlDataListElement,
    Dd => "dd": HtmlElement,
    Del => "del": HtmlModElement,
    Details => "details": HtmlDetailsElement,
    Dfn => "dfn": HtmlElement,
    Dialog => "dialog": HtmlDialogElement,
    Div => "div": HtmlDivElement,
    Dl => "dl": HtmlDListElement,
    Dt => "dt": HtmlElement,
    Em => "em": HtmlElement,
    Embed => "embed": HtmlEmbedElement,
    Fieldset => "fieldset": HtmlFieldSetElement,
    Figcaption => "figcaption": HtmlElement,
    Figure => "figure": HtmlElement,
    Footer => "footer": HtmlElement,
    Form => "form": HtmlFormElement,
    H1 => "h1": HtmlHeadingElement,
    H2 => "h2": HtmlHeadingElement,
    H3 => "h3": HtmlHeadingElement,
    H4 => "h4": HtmlHeadingElement,
    H5 => "h5": HtmlHeadingElement,
    H6 => "h6": HtmlHeadingElement,
    Head => "head": HtmlHeadElement,
    Header => "header": HtmlElement,
    Hgroup => "hgroup": HtmlElement,
    Hr => "hr": HtmlHrElement,
    Html => "html": HtmlHtmlElement,
    I => "i": HtmlElement,
    Iframe => "iframe": HtmlIFrameElement,
    Img => "img": HtmlImageElement,
    Input => "input": HtmlInputElement,
    Ins => "ins": HtmlModElement,
    Kbd => "kbd": HtmlElement,
    Label => "label": HtmlLabelElement,
    Legend => "legend": HtmlLegendElement,
    Li => "li": HtmlLiElement,
    Link => "link": HtmlLinkElement,
    Main => "main": HtmlElement,
    Map => "map": HtmlMapElement,
    Mark => "mark": HtmlElement,
    Menu => "menu": HtmlMenuElement,
    Meta => "meta": HtmlMetaElement,
    Meter => "meter": HtmlMeterElement,
    Nav => "nav": HtmlElement,
    Noscript => "noscript": HtmlElement,
    Object => "object": HtmlObjectElement,
    Ol => "ol": HtmlOListElement,
    Optgroup => "optgroup": HtmlOptGroupElement,
    Option => "option": HtmlOptionElement,
    Output => "output": HtmlOutputElement,
    P => "p": HtmlParagraphElement,
    Picture => "picture": HtmlPictureElement,
    Pre => "pre": HtmlPreElement,
    Progress => "progress": HtmlProgressElement,
    Q => "q": HtmlQuoteElement,
    Rp => "rp": HtmlElement,
    Rt => "rt": HtmlElement,
    Ruby => "ruby": HtmlElement,
    S => "s": HtmlElement,
    Samp => "samp": HtmlElement,
    Script => "script": HtmlScriptElement,
    Search => "search": HtmlElement,
    Section => "section": HtmlElement,
    Select => "select": HtmlSelectElement,
    Slot => "slot": HtmlSlotElement,
    Small => "small": HtmlElement,
    Source => "source": HtmlSourceElement,
    Span => "span": HtmlSpanElement,
    Strong => "strong": HtmlElement,
    Style => "style": HtmlStyleElement,
    Sub => "sub": HtmlElement,
    Summary => "summary": HtmlElement,
    Sup => "sup": HtmlElement,
    Table => "table": HtmlTableElement,
    Tbody => "tbody": HtmlTableSectionElement,
    Td => "td": HtmlTableCellElement,
    Template => "template": HtmlTemplateElement,
    Textarea => "textarea": HtmlTextAreaElement,
    Tfoot => "tfoot": HtmlTableSectionElement,
    Th => "th": HtmlTableCellElement,
    Thead => "thead": HtmlTableSectionElement,
    Time => "time": HtmlTimeElement,
    Title => "title": HtmlTitleElement,
    Tr => "tr": HtmlTableRowElement,
    Track => "track": HtmlTrackElement,
    U => "u": HtmlElement,
    Ul => "ul": HtmlUListElement,
    Var => "var": HtmlElement,
    Video => "video": HtmlVideoElement,
    Wbr => "wbr": HtmlElement,
}

impl TagName {
    /// Parse ignoring ASCII case, `None` outside the closed set
    pub fn lookup(name: &str) -> Option<TagName> {
        TagName::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(name))
    }

    /// True when the tag only has the generic `HTMLElement` interface
    pub fn is_generic(self) -> bool {
        self.interface() == <interfaces::HtmlElement as HtmlInterface>::NAME
    }
}

impl FromStr for TagName {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagName::lookup(s).ok_or_else(|| DomError::UnknownTag(s.to_string()))
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface a browser constructs for an element named `name`.
///
/// Names outside the catalog get `HTMLElement` when they are valid custom
/// element names (contain a hyphen), `HTMLUnknownElement` otherwise.
pub fn interface_for(name: &str) -> &'static str {
    match TagName::lookup(name) {
        Some(tag) => tag.interface(),
        None if name.contains('-') => <interfaces::HtmlElement as HtmlInterface>::NAME,
        None => <interfaces::HtmlUnknownElement as HtmlInterface>::NAME,
    }
}
