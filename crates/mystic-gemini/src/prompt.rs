//! Prompt construction for three-card readings.

use std::fmt::Write;

use mystic_core::oracle::ReadingRequest;

/// Builds the reader prompt for a spread.
#[must_use]
pub fn build_prompt(request: &ReadingRequest) -> String {
    let mut prompt = String::from(
        "You are an expert tarot reader with a mystical and insightful tone. \
         Give a three-card reading whose spread represents the Past, the Present, \
         and the Future.\n\nThe cards drawn are:\n",
    );

    for (label, card) in request.placements() {
        let _ = writeln!(prompt, "- {label}: {} ({})", card.name, card.orientation());
    }

    prompt.push_str(
        "\nWrite a connected reading that flows from one card to the next and \
         interprets each card through its position and orientation. Open with a \
         brief overview, then describe each card's meaning in its position, and \
         close with a summary that ties the reading together. Keep the tone \
         mystical but clear and helpful. Format the answer in markdown.",
    );
    prompt
}
