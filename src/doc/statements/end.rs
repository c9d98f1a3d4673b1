/*!
# `END`

## Purpose
Stop the program.

## Remarks
Execution finishes immediately; lines after the `END` never run. A
program that simply runs off its last line ends the same way, so `END`
matters mostly for stopping early.

## Example
```text
print "shown"
end
print "never shown"
```

*/
