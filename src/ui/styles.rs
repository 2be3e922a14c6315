use leptos::prelude::*;

/// Decorative classes for the home page.
///
/// Entrance and exit motion lives in inline styles driven by signals. Hover
/// effects here use the standalone `translate`, `rotate` and `scale`
/// properties so they compose with those inline transforms.
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Icons: SVG masks tinted by the text colour */
            .icon {
                display: inline-block;
                width: 1.25rem;
                height: 1.25rem;
                flex-shrink: 0;
                background-color: currentColor;
                -webkit-mask: var(--icon) center / contain no-repeat;
                mask: var(--icon) center / contain no-repeat;
            }

            /* Header */
            .header-bar {
                transition: padding 0.3s ease, background-color 0.3s ease, box-shadow 0.3s ease;
            }
            .glass {
                background: rgba(10, 10, 10, 0.72);
                backdrop-filter: blur(16px);
                -webkit-backdrop-filter: blur(16px);
                border-bottom: 1px solid rgba(74, 122, 108, 0.15);
                box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.5);
            }

            /* Buttons */
            .btn-primary {
                color: white;
                background: linear-gradient(135deg, #01503c, #4a7a6c);
                box-shadow: 0 10px 25px -10px rgba(1, 80, 60, 0.8);
                transition: box-shadow 0.3s ease, scale 0.2s ease, translate 0.2s ease;
            }
            .btn-primary:hover {
                box-shadow: 0 15px 35px -10px rgba(74, 122, 108, 0.9);
                scale: 1.03;
            }
            .btn-secondary {
                color: #e4e4e7;
                border: 1px solid rgba(74, 122, 108, 0.4);
                background: rgba(24, 24, 27, 0.6);
                transition: border-color 0.3s ease, background-color 0.3s ease, scale 0.2s ease, translate 0.2s ease;
            }
            .btn-secondary:hover {
                border-color: #6b9a8c;
                background: rgba(1, 80, 60, 0.2);
                scale: 1.03;
            }
            .press:active {
                scale: 0.95;
            }

            /* Text */
            .gradient-text {
                background: linear-gradient(135deg, #6b9a8c, #4a7a6c 50%, #01503c);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }
            .text-glow {
                text-shadow: 0 0 20px rgba(74, 122, 108, 0.6);
                animation: breathe 3s ease-in-out infinite;
            }
            .animated-underline {
                position: relative;
            }
            .animated-underline::after {
                content: "";
                position: absolute;
                left: 0;
                bottom: 0;
                width: 100%;
                height: 1px;
                background: #4a7a6c;
                transform: scaleX(0);
                transform-origin: right;
                transition: transform 0.3s ease;
            }
            .animated-underline:hover::after {
                transform: scaleX(1);
                transform-origin: left;
            }

            /* Hero background */
            .orb {
                position: absolute;
                border-radius: 9999px;
                filter: blur(80px);
                pointer-events: none;
                animation: orb-drift 20s ease-in-out infinite;
            }
            .orb-1 {
                width: 24rem;
                height: 24rem;
                top: -6rem;
                left: -6rem;
                background: rgba(1, 80, 60, 0.35);
            }
            .orb-2 {
                width: 20rem;
                height: 20rem;
                top: 30%;
                right: -5rem;
                background: rgba(74, 122, 108, 0.25);
                animation-delay: -7s;
            }
            .orb-3 {
                width: 16rem;
                height: 16rem;
                bottom: 5%;
                left: 30%;
                background: rgba(107, 154, 140, 0.2);
                animation-delay: -14s;
            }
            @keyframes orb-drift {
                0%, 100% { translate: 0 0; }
                33% { translate: 30px -40px; }
                66% { translate: -20px 20px; }
            }
            .grid-pattern {
                background-image:
                    linear-gradient(rgba(74, 122, 108, 0.08) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(74, 122, 108, 0.08) 1px, transparent 1px);
                background-size: 60px 60px;
            }
            .radial-gradient {
                background: radial-gradient(ellipse at center, transparent 0%, #0a0a0a 75%);
            }
            .particle {
                position: absolute;
                bottom: -10px;
                width: 4px;
                height: 4px;
                border-radius: 9999px;
                background: rgba(107, 154, 140, 0.6);
                animation-name: float-up;
                animation-timing-function: linear;
                animation-iteration-count: infinite;
            }
            @keyframes float-up {
                0% { translate: 0 0; opacity: 0; }
                10% { opacity: 1; }
                90% { opacity: 1; }
                100% { translate: 0 -100vh; opacity: 0; }
            }

            /* Badges */
            .section-badge {
                display: inline-block;
                margin-bottom: 1rem;
                padding: 0.25rem 1rem;
                border-radius: 9999px;
                font-size: 0.875rem;
                color: #4a7a6c;
                border: 1px solid rgba(74, 122, 108, 0.3);
                background: rgba(1, 80, 60, 0.1);
            }
            .badge-glow {
                animation: badge-glow 3s ease-in-out infinite;
            }
            @keyframes badge-glow {
                0%, 100% { box-shadow: 0 0 0 rgba(74, 122, 108, 0); }
                50% { box-shadow: 0 0 24px rgba(74, 122, 108, 0.45); }
            }
            .glow-pulse {
                animation: glow-pulse 2.5s ease-in-out infinite;
            }
            @keyframes glow-pulse {
                0%, 100% { box-shadow: 0 0 0 rgba(74, 122, 108, 0.4); }
                50% { box-shadow: 0 0 20px rgba(74, 122, 108, 0.7); }
            }

            /* Cards */
            .feature-card {
                background: linear-gradient(145deg, rgba(24, 24, 27, 0.8), rgba(9, 9, 11, 0.9));
                border: 1px solid rgba(74, 122, 108, 0.15);
                transition: border-color 0.3s ease, box-shadow 0.3s ease, translate 0.3s ease, scale 0.3s ease;
            }
            .feature-card:hover {
                border-color: rgba(74, 122, 108, 0.4);
            }
            .card-hover:hover {
                translate: 0 -8px;
                box-shadow: 0 20px 40px -20px rgba(1, 80, 60, 0.6);
            }
            .feature-icon {
                width: 3rem;
                height: 3rem;
                margin-bottom: 1rem;
                border-radius: 0.75rem;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(1, 80, 60, 0.2);
                transition: rotate 0.5s ease, scale 0.3s ease;
            }
            .group:hover .feature-icon {
                rotate: 360deg;
                scale: 1.1;
            }
            .old-way-card {
                background: rgba(127, 29, 29, 0.08);
                border: 1px solid rgba(248, 113, 113, 0.2);
            }
            .better-way-card {
                background: linear-gradient(145deg, rgba(1, 80, 60, 0.2), rgba(9, 9, 11, 0.9));
                border: 1px solid rgba(74, 122, 108, 0.35);
            }
            .gradient-border {
                border: 1px solid transparent;
                background:
                    linear-gradient(#0f0f10, #0f0f10) padding-box,
                    linear-gradient(135deg, #01503c, #6b9a8c) border-box;
            }
            .shimmer {
                background: linear-gradient(110deg, transparent 30%, rgba(107, 154, 140, 0.12) 50%, transparent 70%);
                background-size: 200% 100%;
                animation: shimmer 4s linear infinite;
            }
            @keyframes shimmer {
                from { background-position: 200% 0; }
                to { background-position: -200% 0; }
            }
            .profile-glow,
            .cta-glow,
            .footer-glow,
            .roadmap-glow {
                position: absolute;
                inset: 0;
                pointer-events: none;
                background: radial-gradient(circle at 50% 0%, rgba(1, 80, 60, 0.25), transparent 60%);
                animation: breathe 6s ease-in-out infinite;
            }
            .footer-glow {
                background: radial-gradient(circle at 50% 100%, rgba(1, 80, 60, 0.15), transparent 60%);
            }

            /* Hover and press helpers */
            .hover-rise { transition: translate 0.3s ease; }
            .hover-rise:hover { translate: 0 -5px; }
            .hover-rise-sm { transition: translate 0.3s ease; }
            .hover-rise-sm:hover { translate: 0 -3px; }
            .hover-slide { transition: translate 0.3s ease, border-color 0.3s ease; }
            .hover-slide:hover { translate: 10px 0; }
            .hover-lift { transition: scale 0.2s ease; }
            .hover-lift:hover { scale: 1.05; }
            .hover-tilt { transition: rotate 0.3s ease, scale 0.3s ease; }
            .hover-tilt:hover { rotate: 5deg; scale: 1.1; }

            /* Looping accents */
            .breathe { animation: breathe 2s ease-in-out infinite; }
            @keyframes breathe {
                0%, 100% { opacity: 1; }
                50% { opacity: 0.6; }
            }
            .nudge-x { animation: nudge-x 1.5s ease-in-out infinite; }
            @keyframes nudge-x {
                0%, 100% { translate: 0 0; }
                50% { translate: 5px 0; }
            }
            .bob-y { animation: bob-y 1.5s ease-in-out infinite; }
            @keyframes bob-y {
                0%, 100% { translate: 0 0; }
                50% { translate: 0 8px; }
            }
            .avatar-pulse { animation: glow-pulse 3s ease-in-out infinite; }
            .avatar-ripple {
                position: absolute;
                inset: 0;
                border-radius: 9999px;
                border: 2px solid rgba(74, 122, 108, 0.5);
                animation: ripple 2.5s ease-out infinite;
            }
            @keyframes ripple {
                from { scale: 1; opacity: 0.8; }
                to { scale: 1.5; opacity: 0; }
            }

            /* Roadmap */
            .step-number {
                width: 2.5rem;
                height: 2.5rem;
                flex-shrink: 0;
                border-radius: 9999px;
                display: flex;
                align-items: center;
                justify-content: center;
                font-weight: 700;
                color: white;
                background: linear-gradient(135deg, #01503c, #4a7a6c);
            }
            .roadmap-line {
                position: absolute;
                left: 2.75rem;
                top: 1.5rem;
                bottom: 1.5rem;
                width: 2px;
                background: linear-gradient(to bottom, #01503c, rgba(74, 122, 108, 0.1));
            }

            /* Tabs */
            .tabs-list {
                display: inline-flex;
                gap: 0.5rem;
                padding: 0.375rem;
                border-radius: 1rem;
                background: rgba(24, 24, 27, 0.6);
                border: 1px solid rgba(74, 122, 108, 0.2);
            }
            .tab-item {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 1.5rem;
                border-radius: 0.75rem;
                font-weight: 500;
                color: #a1a1aa;
                cursor: pointer;
                transition: color 0.3s ease, background-color 0.3s ease, scale 0.2s ease;
            }
            .tab-item:hover { color: white; scale: 1.02; }
            .tab-item:active { scale: 0.98; }
            .tab-active {
                color: white;
                background: linear-gradient(135deg, #01503c, #4a7a6c);
                box-shadow: 0 10px 25px -10px rgba(1, 80, 60, 0.8);
            }

            /* FAQ */
            .faq-question {
                cursor: pointer;
                transition: background-color 0.2s ease;
            }
            .faq-question:hover {
                background: rgba(1, 80, 60, 0.08);
            }

            .section-divider {
                height: 1px;
                max-width: 80rem;
                margin: 0 auto;
                background: linear-gradient(90deg, transparent, rgba(74, 122, 108, 0.4), transparent);
            }

            @media (prefers-reduced-motion: reduce) {
                .orb, .particle, .shimmer, .breathe, .nudge-x, .bob-y,
                .badge-glow, .glow-pulse, .avatar-pulse, .avatar-ripple, .text-glow {
                    animation: none;
                }
            }
            "#
        </style>
    }
}
