//! SHA-512 round functions and the 80-round compression loop.

use super::K512;

#[inline(always)]
pub(crate) fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
pub(crate) fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
pub(crate) fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
pub(crate) fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
pub(crate) fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub(crate) fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

#[inline(always)]
fn schedule(w: &[u64; 16], i: usize) -> u64 {
    w[i & 15]
        .wrapping_add(small_sigma0(w[(i + 1) & 15]))
        .wrapping_add(w[(i + 9) & 15])
        .wrapping_add(small_sigma1(w[(i + 14) & 15]))
}

#[cfg(not(feature = "speed"))]
pub(crate) fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (i, ki) in K512.iter().enumerate() {
        if i >= 16 {
            w[i & 15] = schedule(&w, i);
        }

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(w[i & 15])
            .wrapping_add(*ki);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}

#[cfg(feature = "speed")]
pub(crate) fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $i:expr) => {{
            let i = $i;
            if i >= 16 {
                w[i & 15] = schedule(&w, i);
            }

            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(w[i & 15])
                .wrapping_add(K512[i]);

            let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(t2);
        }};
    }

    for i in (0..80).step_by(8) {
        round!(a, b, c, d, e, f, g, h, i);
        round!(h, a, b, c, d, e, f, g, i + 1);
        round!(g, h, a, b, c, d, e, f, i + 2);
        round!(f, g, h, a, b, c, d, e, i + 3);
        round!(e, f, g, h, a, b, c, d, i + 4);
        round!(d, e, f, g, h, a, b, c, i + 5);
        round!(c, d, e, f, g, h, a, b, i + 6);
        round!(b, c, d, e, f, g, h, a, i + 7);
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}
