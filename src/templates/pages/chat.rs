// templates/pages/chat.rs

use crate::session::{ChatTurn, Page};
use crate::templates::{components::button, desktop_layout};
use maud::{html, Markup};

pub fn chat_page(transcript: &[ChatTurn]) -> Markup {
    desktop_layout(
        Page::Chat,
        html! {
            h1 { (Page::Chat.title()) }
            p {
                "Ask any questions about opening or managing a restaurant in San Jose, and get tailored "
                "insights to help you succeed. Whether you're a beginner or an experienced restaurant "
                "owner, the chatbot is here to provide guidance."
            }

            form class="chat-form" action="/chat" method="post" {
                label for="question" { "Type your question here:" }
                input type="text" id="question" name="question" autocomplete="off" required;
                (button("Get Advice"))
            }

            @if !transcript.is_empty() {
                section class="transcript" {
                    // Newest first.
                    @for turn in transcript.iter().rev() {
                        div class="chat-turn" {
                            p class="chat-question" { strong { "You: " } (turn.question) }
                            @if turn.answer.is_failure() {
                                p class="chat-response failed" { (turn.answer.text()) }
                            } @else {
                                p class="chat-response" { strong { "Chatbot: " } (turn.answer.text()) }
                            }
                        }
                    }
                }
            }
        },
    )
}
