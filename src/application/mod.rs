// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data layer to accomplish one goal: turn a
// corpus into a vocabulary and feature vectors.
//
// Rules for this layer:
//   - No vectorisation or parsing logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and configuration

// The corpus → vocabulary → vectors workflow
pub mod featurize_use_case;
