//! Fixed instruction templates sent to the chat-completion service.

use crate::advisor::AdviceRequest;

pub const MARKET_ANALYST_SYSTEM: &str = "You are a market analyst specializing in providing \
detailed insights for restaurant owners in San Jose, California.";

pub const CHAT_SYSTEM: &str =
    "You are a helpful assistant providing restaurant business advice for locations in San Jose.";

pub fn market_analysis_prompt(plaza: &str) -> String {
    format!(
        "Provide a comprehensive analysis of the market for the plaza called '{plaza}' in San Jose, \
specifically for someone looking to open a restaurant. Include the following details:

- **Pros and Cons**: The main advantages and disadvantages of this location for a restaurant, \
both high-level and detailed.

- **Accessibility Issues**: Parking, public transit, walkability, and any accessibility \
challenges or benefits that affect customer flow.

- **Demographics**: The local population (income, family size, age distribution, lifestyle) \
and which kinds of restaurants (casual, fine dining, fast food, niche cuisines) it favors.

- **Foot Traffic Trends**: Peak hours, busy days and seasonal variation around the plaza, with \
concrete tips such as opening hours or menu specials.

- **Local Competition**: Existing restaurant types and notable competitors, gaps in the market, \
and how a newcomer could stand out.

- **Atmosphere and Customer Expectations**: The general feel of the plaza, who visits \
(families, professionals, students, tourists) and how to match decor and vibe to them.

- **Special Advice for Beginners**: Startup tips, common local pitfalls, building a customer \
base, and first marketing steps.

- **Advanced Insights for Experienced Owners**: Growing revenue, streamlining operations, \
delivery platforms, social media and operational efficiency given this plaza.

Keep the advice practical and actionable for both first-time and seasoned owners."
    )
}

pub fn market_analysis_request(plaza: &str, max_tokens: u32) -> AdviceRequest {
    AdviceRequest {
        system: MARKET_ANALYST_SYSTEM.to_string(),
        user: market_analysis_prompt(plaza),
        max_tokens,
        temperature: None,
    }
}

/// The user's question goes through verbatim.
pub fn chat_request(question: &str, max_tokens: u32) -> AdviceRequest {
    AdviceRequest {
        system: CHAT_SYSTEM.to_string(),
        user: question.to_string(),
        max_tokens,
        temperature: None,
    }
}
