/*!
# Built-in Functions

Functions are called with parentheses and appear anywhere an
expression may.

## Trigonometry

`sin(x)`, `cos(x)`, `tan(x)` and their inverses `asin(x)`, `acos(x)`,
`atan(x)` take one number (radians) and return a float. The
reciprocals are included: `sec(x)` is `1/cos(x)`, `csc(x)` is
`1/sin(x)`, `cot(x)` is `1/tan(x)`.

```text
print sin(pi / 2)
1.0
```

## `rand(lo, hi)`

A uniformly chosen integer between `lo` and `hi`, both ends included.
Both bounds must be integers with `lo` below `hi`.

```text
roll = rand(1, 6)
```

## `len(s)`

The number of characters in a string, counted the way a reader counts
them: `len("Swift🌀Basic")` is `11`.

## `count(d)`

The number of entries in a dictionary: `count([])` is `0`.

Handing any of these the wrong shape of argument stops the program
with an error naming the function.

*/
