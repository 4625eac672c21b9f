//! Rendering of a successful generation: similar products, video script,
//! social media posts, always in this order.

use super::state::GenerationResult;
use crate::shared::text_format::{format_percent, format_price, split_lines};
use contracts::usecases::u601_generate_script::SimilarProduct;
use leptos::prelude::*;

pub fn price_label(price: Option<f64>) -> String {
    let text = format_price(price).unwrap_or_else(|| "Not specified".to_string());
    format!("Price: {}", text)
}

pub fn similarity_label(similarity: f64) -> String {
    format!("Similarity: {}", format_percent(similarity, 1))
}

/// One owned paragraph text per line, empty lines included
pub fn paragraphs(text: &str) -> Vec<String> {
    split_lines(text).into_iter().map(str::to_string).collect()
}

#[component]
pub fn GenerationResults(result: GenerationResult) -> impl IntoView {
    let GenerationResult {
        similar_products,
        marketing_content,
    } = result;

    view! {
        <div class="results">
            <div class="result-section">
                <h2>"📦 Similar Products Found"</h2>
                <div class="similar-products">
                    {similar_products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </div>

            <div class="result-section">
                <h2>"🎥 Video Marketing Script"</h2>
                <div class="script-content">
                    <Paragraphs text=marketing_content.video_script />
                </div>
            </div>

            <div class="result-section">
                <h2>"📱 Social Media Content"</h2>
                <div class="social-content">
                    <Paragraphs text=marketing_content.social_media_posts />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProductCard(product: SimilarProduct) -> impl IntoView {
    view! {
        <div class="product-card">
            <h3>{product.name}</h3>
            <p>{format!("Category: {}", product.category)}</p>
            <p>{price_label(product.price)}</p>
            <p>{similarity_label(product.similarity)}</p>
        </div>
    }
}

#[component]
fn Paragraphs(text: String) -> impl IntoView {
    paragraphs(&text)
        .into_iter()
        .map(|line| view! { <p>{line}</p> })
        .collect_view()
}
