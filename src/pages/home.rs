use yew::prelude::*;

use crate::components::floating::{FloatingShapes, Keyframe, ShapeKind, ShapeSpec};
use crate::components::reveal::Reveal;
use crate::config;

struct Topic {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const TOPICS: [Topic; 8] = [
    Topic {
        icon: "💻",
        title: "O que é MEI",
        blurb: "Entenda completamente o que é o Microempreendedor Individual e como funciona este regime tributário especial.",
    },
    Topic {
        icon: "📝",
        title: "Como se cadastrar no portal do empreendedor e se tornar um MEI",
        blurb: "Passo a passo detalhado para realizar seu cadastro e formalizar seu negócio de forma rápida e segura.",
    },
    Topic {
        icon: "✅",
        title: "Quais são as atividades permitidas para MEI?",
        blurb: "Lista completa das atividades econômicas permitidas para MEI e orientações sobre como escolher a correta.",
    },
    Topic {
        icon: "📈",
        title: "Quais são as vantagens de ser MEI?",
        blurb: "Descubra todos os benefícios e vantagens que o regime MEI oferece para o seu negócio.",
    },
    Topic {
        icon: "🧮",
        title: "Como funciona a tributação do MEI?",
        blurb: "Entenda o sistema tributário simplificado do MEI e como calcular seus impostos.",
    },
    Topic {
        icon: "📄",
        title: "Como emitir nota fiscal sendo MEI?",
        blurb: "Aprenda quando e como emitir nota fiscal corretamente sendo um MEI.",
    },
    Topic {
        icon: "👥",
        title: "Quais são as obrigações do MEI?",
        blurb: "Conheça todas as obrigações e responsabilidades que você deve cumprir como MEI.",
    },
    Topic {
        icon: "🏆",
        title: "Conquiste o sucesso como MEI: 7 dicas infalíveis!",
        blurb: "Estratégias e dicas práticas para fazer seu negócio MEI prosperar e alcançar o sucesso.",
    },
];

const HERO_SHAPES: &[ShapeSpec] = &[
    ShapeSpec {
        name: "hero-dot-a",
        kind: ShapeKind::Dot,
        width_px: 16.0,
        height_px: 16.0,
        anchor: "top: 5rem; left: 2.5rem;",
        color: "#22d3ee",
        opacity: 0.2,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 10.0, y_px: -20.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 4.0,
        delay_s: 0.0,
    },
    ShapeSpec {
        name: "hero-dot-b",
        kind: ShapeKind::Dot,
        width_px: 24.0,
        height_px: 24.0,
        anchor: "top: 10rem; right: 5rem;",
        color: "#67e8f9",
        opacity: 0.2,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: -15.0, y_px: -30.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 5.0,
        delay_s: 1.0,
    },
    ShapeSpec {
        name: "hero-dot-c",
        kind: ShapeKind::Dot,
        width_px: 32.0,
        height_px: 32.0,
        anchor: "bottom: 10rem; left: 5rem;",
        color: "#06b6d4",
        opacity: 0.1,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 20.0, y_px: -25.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 6.0,
        delay_s: 2.0,
    },
];

const VIDEO_SHAPES: &[ShapeSpec] = &[
    ShapeSpec {
        name: "video-dot-a",
        kind: ShapeKind::Dot,
        width_px: 12.0,
        height_px: 12.0,
        anchor: "top: 2.5rem; left: 2.5rem;",
        color: "#22d3ee",
        opacity: 0.25,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 8.0, y_px: -15.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 5.0,
        delay_s: 1.0,
    },
    ShapeSpec {
        name: "video-diamond",
        kind: ShapeKind::Diamond,
        width_px: 16.0,
        height_px: 16.0,
        anchor: "bottom: 5rem; right: 4rem;",
        color: "#67e8f9",
        opacity: 0.2,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 0.0, y_px: -20.0, rotate_deg: 180.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 360.0, scale: 1.0 },
        ],
        period_s: 8.0,
        delay_s: 2.0,
    },
    ShapeSpec {
        name: "video-dot-b",
        kind: ShapeKind::Dot,
        width_px: 8.0,
        height_px: 8.0,
        anchor: "top: 8rem; right: 25%;",
        color: "#06b6d4",
        opacity: 0.3,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: -6.0, y_px: -12.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 6.0,
        delay_s: 3.0,
    },
];

const PRICING_SHAPES: &[ShapeSpec] = &[
    ShapeSpec {
        name: "pricing-triangle",
        kind: ShapeKind::Triangle,
        width_px: 20.0,
        height_px: 20.0,
        anchor: "top: 4rem; left: 5rem;",
        color: "#67e8f9",
        opacity: 0.18,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 0.0, y_px: -18.0, rotate_deg: 180.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 360.0, scale: 1.0 },
        ],
        period_s: 7.0,
        delay_s: 1.5,
    },
    ShapeSpec {
        name: "pricing-bar",
        kind: ShapeKind::Bar,
        width_px: 24.0,
        height_px: 2.0,
        anchor: "bottom: 6rem; right: 5rem;",
        color: "#22d3ee",
        opacity: 0.25,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 12.0, y_px: -14.0, rotate_deg: 180.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 360.0, scale: 1.0 },
        ],
        period_s: 9.0,
        delay_s: 2.8,
    },
    ShapeSpec {
        name: "pricing-pulse",
        kind: ShapeKind::Dot,
        width_px: 12.0,
        height_px: 12.0,
        anchor: "top: 50%; left: 2rem;",
        color: "#06b6d4",
        opacity: 0.22,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 10.0, y_px: -16.0, rotate_deg: 0.0, scale: 1.3 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 6.0,
        delay_s: 0.8,
    },
];

const CONTENT_SHAPES: &[ShapeSpec] = &[
    ShapeSpec {
        name: "content-hexagon",
        kind: ShapeKind::Hexagon,
        width_px: 16.0,
        height_px: 16.0,
        anchor: "top: 5rem; left: 4rem;",
        color: "#0891b2",
        opacity: 0.15,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 0.0, y_px: -20.0, rotate_deg: 180.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 360.0, scale: 1.0 },
        ],
        period_s: 10.0,
        delay_s: 1.0,
    },
    ShapeSpec {
        name: "content-diamond",
        kind: ShapeKind::Diamond,
        width_px: 20.0,
        height_px: 20.0,
        anchor: "bottom: 8rem; right: 6rem;",
        color: "#06b6d4",
        opacity: 0.12,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: -8.0, y_px: -22.0, rotate_deg: 0.0, scale: 1.4 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 8.0,
        delay_s: 3.0,
    },
    ShapeSpec {
        name: "content-dot",
        kind: ShapeKind::Dot,
        width_px: 12.0,
        height_px: 12.0,
        anchor: "top: 50%; right: 3rem;",
        color: "#22d3ee",
        opacity: 0.18,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 12.0, y_px: -16.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 7.0,
        delay_s: 2.2,
    },
    ShapeSpec {
        name: "content-bar",
        kind: ShapeKind::Bar,
        width_px: 24.0,
        height_px: 2.0,
        anchor: "bottom: 4rem; left: 25%;",
        color: "#0e7490",
        opacity: 0.2,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 0.0, y_px: -14.0, rotate_deg: 180.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 360.0, scale: 1.0 },
        ],
        period_s: 11.0,
        delay_s: 4.0,
    },
    ShapeSpec {
        name: "content-pulse",
        kind: ShapeKind::Dot,
        width_px: 8.0,
        height_px: 8.0,
        anchor: "top: 10rem; left: 50%;",
        color: "#0891b2",
        opacity: 0.25,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: -10.0, y_px: -12.0, rotate_deg: 0.0, scale: 1.5 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 5.0,
        delay_s: 1.8,
    },
];

const FOOTER_SHAPES: &[ShapeSpec] = &[
    ShapeSpec {
        name: "footer-dot",
        kind: ShapeKind::Dot,
        width_px: 12.0,
        height_px: 12.0,
        anchor: "top: 2rem; left: 3rem;",
        color: "#22d3ee",
        opacity: 0.2,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 8.0, y_px: -12.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 6.0,
        delay_s: 1.0,
    },
    ShapeSpec {
        name: "footer-triangle",
        kind: ShapeKind::Triangle,
        width_px: 16.0,
        height_px: 16.0,
        anchor: "bottom: 1.5rem; right: 4rem;",
        color: "#67e8f9",
        opacity: 0.15,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 0.0, y_px: -10.0, rotate_deg: 180.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 360.0, scale: 1.0 },
        ],
        period_s: 8.0,
        delay_s: 2.0,
    },
    ShapeSpec {
        name: "footer-bar",
        kind: ShapeKind::Bar,
        width_px: 8.0,
        height_px: 24.0,
        anchor: "top: 1rem; right: 33%;",
        color: "#06b6d4",
        opacity: 0.18,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 0.5, x_px: 0.0, y_px: 0.0, rotate_deg: 180.0, scale: 1.2 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 360.0, scale: 1.0 },
        ],
        period_s: 9.0,
        delay_s: 3.0,
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <header class="hero">
                <FloatingShapes shapes={HERO_SHAPES} />
                <div class="hero-content">
                    <span class="brand-mark pop-in">{"MEI"}</span>
                    <h1 class="rise rise-1">
                        { config::HERO_TITLE_LEAD }
                        <br />
                        <span class="text-gradient">{ config::HERO_TITLE_ACCENT }</span>
                    </h1>
                    <p class="hero-subtitle rise rise-2">
                        {"Se você é um(a) empreendedor(a) que busca informações claras e objetivas sobre como formalizar seu negócio, este guia é para você!"}
                    </p>
                    <div class="rise rise-3">
                        <a href={config::CHECKOUT_URL} class="cta-button">
                            {"🚀 Torne-se um MEI de sucesso"}
                        </a>
                    </div>
                </div>
                <div class="scroll-hint">{"⌄"}</div>
            </header>

            <section class="video-section">
                <FloatingShapes shapes={VIDEO_SHAPES} />
                <Reveal>
                    <div class="section-header">
                        <h2>{"Assista ao "}<span class="text-gradient">{"Guia Completo"}</span></h2>
                        <p>{"Veja como transformar seu conhecimento em um negócio formalizado e próspero"}</p>
                    </div>
                </Reveal>
                <Reveal>
                    <div class="video-card">
                        <iframe
                            src={config::VIDEO_EMBED_URL}
                            title={config::VIDEO_TITLE}
                            frameborder="0"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen={true}
                        />
                    </div>
                </Reveal>
            </section>

            <section class="pricing-section">
                <FloatingShapes shapes={PRICING_SHAPES} />
                <Reveal>
                    <div class="pricing-card">
                        <h3>{"Compre já por apenas"}</h3>
                        <span class="old-price">{"R$57,50"}</span>
                        <div class="promo-price">{"R$37,50"}</div>
                        <div class="discount-badge">{"Economia de 35%"}</div>
                        <a href={config::CHECKOUT_URL} class="cta-button buy-button">
                            {"🛒 Adquirir"}
                        </a>
                        <div class="secure-note">{"🔒 Compra 100% segura"}</div>
                    </div>
                </Reveal>
            </section>

            <section class="content-section">
                <FloatingShapes shapes={CONTENT_SHAPES} />
                <Reveal>
                    <div class="section-header">
                        <h2>{"Conteúdo"}</h2>
                        <p>
                            {"Este guia foi escrito por um contador com anos de experiência em assessoria contábil para MEIs. Com uma linguagem simples e acessível, sem jargões técnicos, para garantir que todas as informações sejam facilmente compreendidas."}
                        </p>
                    </div>
                </Reveal>
                <div class="topic-grid">
                    { for TOPICS.iter().map(|topic| html! {
                        <Reveal>
                            <div class="topic-card">
                                <div class="topic-icon">{ topic.icon }</div>
                                <h3>{ topic.title }</h3>
                                <p>{ topic.blurb }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <FloatingShapes shapes={FOOTER_SHAPES} />
                <Reveal>
                    <h3>{"nos siga nas redes sociais!"}</h3>
                    <div class="social-links">
                        <a href={config::INSTAGRAM_URL} class="social-link">{"Instagram"}</a>
                        <a href={config::FACEBOOK_URL} class="social-link">{"Facebook"}</a>
                    </div>
                </Reveal>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #0f172a;
                    color: #ffffff;
                    overflow-x: hidden;
                }

                .landing-page section,
                .landing-page header,
                .landing-page footer {
                    position: relative;
                    overflow: hidden;
                }

                .floating-shapes {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: radial-gradient(circle at 30% 20%, #164e63 0%, #0f172a 60%);
                }

                .hero-content {
                    text-align: center;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 1rem;
                    position: relative;
                    z-index: 1;
                }

                .brand-mark {
                    display: inline-block;
                    font-size: 6rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #22d3ee, #0891b2);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 1.5rem;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    font-weight: 700;
                    line-height: 1.2;
                    margin: 0 0 1.5rem;
                }

                .text-gradient {
                    background: linear-gradient(45deg, #22d3ee, #67e8f9);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.4rem;
                    color: #cbd5e1;
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                }

                .pop-in {
                    opacity: 0;
                    animation: pop-in 1s ease-out 0.2s forwards;
                }

                @keyframes pop-in {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }

                .rise {
                    opacity: 0;
                    animation: rise-in 0.8s ease-out forwards;
                }

                .rise-1 { animation-delay: 0.4s; }
                .rise-2 { animation-delay: 0.6s; }
                .rise-3 { animation-delay: 0.8s; }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .cta-button {
                    display: inline-block;
                    padding: 1.25rem 3rem;
                    background: linear-gradient(45deg, #06b6d4, #0891b2);
                    color: white;
                    text-decoration: none;
                    border-radius: 12px;
                    font-size: 1.25rem;
                    font-weight: 600;
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(6, 182, 212, 0.4);
                }

                .scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 2rem;
                    color: #22d3ee;
                    animation: hint-bounce 2s ease-in-out infinite;
                }

                @keyframes hint-bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }

                .video-section {
                    padding: 5rem 1rem;
                    background: #1e293b;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-header h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .section-header p {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                    max-width: 44rem;
                    margin: 0 auto;
                }

                .video-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    background: #000;
                    border: 1px solid rgba(34, 211, 238, 0.2);
                    border-radius: 12px;
                    overflow: hidden;
                }

                .video-card iframe {
                    display: block;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border: none;
                }

                .pricing-section {
                    padding: 5rem 1rem;
                    background: #0f172a;
                }

                .pricing-card {
                    max-width: 32rem;
                    margin: 0 auto;
                    text-align: center;
                    background: #1e293b;
                    border: 1px solid rgba(34, 211, 238, 0.2);
                    border-radius: 12px;
                    padding: 3rem 2rem;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .pricing-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 8px 30px rgba(6, 182, 212, 0.15);
                }

                .pricing-card h3 {
                    font-size: 1.75rem;
                    color: #22d3ee;
                    margin: 0 0 1.5rem;
                }

                .old-price {
                    font-size: 1.1rem;
                    color: #94a3b8;
                    text-decoration: line-through;
                }

                .promo-price {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #f87171;
                    margin-bottom: 1rem;
                }

                .discount-badge {
                    display: inline-block;
                    background: #22c55e;
                    color: white;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.9rem;
                    font-weight: 600;
                    margin-bottom: 2rem;
                }

                .buy-button {
                    display: block;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .secure-note {
                    font-size: 0.9rem;
                    color: #94a3b8;
                }

                .content-section {
                    padding: 5rem 1rem;
                    background: #f3f4f6;
                    color: #1e293b;
                }

                .content-section .section-header h2 {
                    color: #1e293b;
                }

                .content-section .section-header p {
                    color: #4b5563;
                }

                .topic-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .topic-card {
                    height: 100%;
                    background: white;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .topic-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 8px 30px rgba(6, 182, 212, 0.15);
                }

                .topic-icon {
                    width: 5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.5rem;
                    background: linear-gradient(45deg, #06b6d4, #0891b2);
                    border-radius: 16px;
                    margin: 0 auto 1rem;
                    transition: transform 0.3s ease;
                }

                .topic-card:hover .topic-icon {
                    transform: scale(1.1) rotate(5deg);
                }

                .topic-card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 1rem;
                }

                .topic-card p {
                    color: #4b5563;
                    margin: 0;
                }

                .footer {
                    background: #1e293b;
                    padding: 3rem 1rem;
                    text-align: center;
                }

                .footer h3 {
                    font-size: 1.5rem;
                    color: #22d3ee;
                    margin: 0 0 1rem;
                }

                .social-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                }

                .social-link {
                    color: #94a3b8;
                    text-decoration: none;
                    font-size: 1.2rem;
                    transition: all 0.3s ease;
                }

                .social-link:hover {
                    color: #22d3ee;
                    transform: scale(1.2) rotate(5deg);
                }

                @media (max-width: 968px) {
                    .topic-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .brand-mark {
                        font-size: 4rem;
                    }

                    .hero h1 {
                        font-size: 2.25rem;
                    }

                    .hero-subtitle {
                        font-size: 1.1rem;
                    }

                    .promo-price {
                        font-size: 2.75rem;
                    }

                    .topic-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
