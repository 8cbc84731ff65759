// templates/components/lead_form.rs
use maud::{html, Markup};

use crate::leads::LeadKind;

/// A lead-capture form posting to `/leads`. `property` pre-fills the
/// property the visitor is asking about.
pub fn lead_form(kind: LeadKind, property: Option<&str>) -> Markup {
    html! {
        form class="lead-form" method="post" action="/leads" {
            input type="hidden" name="kind" value=(kind.as_str());
            @if let Some(property) = property {
                input type="hidden" name="property" value=(property);
            }
            @if kind != LeadKind::Newsletter {
                label { "Name" input type="text" name="name" required; }
            }
            label { "Email" input type="email" name="email" required; }
            @match kind {
                LeadKind::Newsletter => {}
                LeadKind::Consultation => {
                    label { "Phone" input type="tel" name="phone"; }
                    label { "Preferred date" input type="date" name="date"; }
                    label { "Preferred time" input type="time" name="time"; }
                    label { "Message" textarea name="message" {} }
                }
                LeadKind::QuoteRequest => {
                    label { "Phone" input type="tel" name="phone"; }
                    label { "Property type" input type="text" name="propertyType"; }
                    label { "Location" input type="text" name="location"; }
                    label { "Budget" input type="text" name="budget"; }
                    label { "Timeframe" input type="text" name="timeframe"; }
                }
                LeadKind::InformationRequest => {
                    label { "Phone" input type="tel" name="phone"; }
                    label { "Interested in" input type="text" name="interest"; }
                    label { "Message" textarea name="message" {} }
                }
                LeadKind::QuickContact => {
                    label { "Phone" input type="tel" name="phone"; }
                    label { "Message" textarea name="message" {} }
                }
            }
            button class="btn" type="submit" {
                @if kind == LeadKind::Newsletter { "Subscribe" } @else { "Send" }
            }
        }
    }
}
