use crate::models::TripPreferences;

const INSTRUCTIONS: &str = "Please provide: a recommended destination, top attractions, best time to visit, accommodation suggestions, travel tips, and 2-3 sample activities. Return the answer in plain text with headings.";

/// Render the form values into the user message sent through the proxy.
pub fn build_prompt(prefs: &TripPreferences) -> String {
    format!(
        "User preferences:\n\
         - Destination: {}\n\
         - Date: {}\n\
         - Travellers: {}\n\
         - Trip type: {}\n\
         - Budget: {}\n\
         - Hotel near me: {}\n\
         - Show best places: {}\n\
         \n\
         {}",
        prefs.destination,
        prefs.travel_date,
        prefs.travellers,
        prefs.trip_type,
        prefs.budget,
        prefs.hotel_nearby,
        prefs.best_places,
        INSTRUCTIONS
    )
}
